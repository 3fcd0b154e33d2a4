//! End-to-end flows through the public command surface, the way the
//! screens drive them.

use std::sync::{Arc, Mutex};

use salon_core::catalog::filter_salons;
use salon_core::{ColorScheme, Palette, Salon};
use salon_mobile_lib::commands::{appointments, auth, booking, catalog, profile, theme};
use salon_mobile_lib::error::ErrorCode;
use salon_mobile_lib::state::{AuthState, ConfigState};
use salon_mobile_lib::{bootstrap, AppContext};

fn context() -> AppContext {
    bootstrap(ConfigState::default())
}

fn login_form(email: &str, password: &str) -> auth::LoginForm {
    auth::LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_login_then_logout_restores_initial_state() {
    let ctx = context();
    let initial = ctx.auth.state();

    let outcome = auth::login(&ctx.auth, &login_form("a@b.com", "x")).unwrap();
    assert_eq!(outcome.user.unwrap().email, "a@b.com");
    assert!(ctx.auth.is_authenticated());

    auth::logout(&ctx.auth);
    assert_eq!(ctx.auth.state(), initial);
    assert_eq!(initial, AuthState::anonymous());
}

#[test]
fn test_screens_follow_session_through_subscription() {
    let ctx = context();
    let greetings = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&greetings);
    ctx.auth
        .subscribe(move |s| sink.lock().unwrap().push(s.greeting_name().to_string()));

    auth::signup(
        &ctx.auth,
        &auth::SignupForm {
            name: "Ann Lee".to_string(),
            email: "ann@example.com".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
        },
    )
    .unwrap();
    auth::logout(&ctx.auth);
    auth::login(&ctx.auth, &login_form("ann@example.com", "pw")).unwrap();

    assert_eq!(
        *greetings.lock().unwrap(),
        vec!["Ann Lee", "Guest", "John Doe"]
    );
}

#[test]
fn test_rejected_form_notifies_nobody() {
    let ctx = context();
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    ctx.auth.subscribe(move |_| *sink.lock().unwrap() += 1);

    let err = auth::login(&ctx.auth, &login_form("", "")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_toggle_is_involutive() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let ctx = bootstrap(ConfigState {
            color_scheme: scheme,
            ..ConfigState::default()
        });
        let original = theme::get_theme(&ctx.theme);

        theme::toggle_theme(&ctx.theme);
        let restored = theme::toggle_theme(&ctx.theme);

        assert_eq!(restored, original);
    }
}

#[test]
fn test_theme_subscribers_see_palette() {
    let ctx = context();
    let backgrounds = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&backgrounds);
    let id = ctx
        .theme
        .subscribe(move |t| sink.lock().unwrap().push(t.palette().background));

    theme::toggle_theme(&ctx.theme);
    ctx.theme.unsubscribe(id);
    theme::toggle_theme(&ctx.theme);

    assert_eq!(*backgrounds.lock().unwrap(), vec![Palette::DARK.background]);
}

#[test]
fn test_filter_hair_scenario() {
    let glow = Salon {
        name: "Glow Studio".to_string(),
        services: vec!["Haircut".to_string(), "Spa".to_string()],
        ..sample_salon("1")
    };
    let nails = Salon {
        name: "Nail Bar".to_string(),
        services: vec!["Nails".to_string()],
        ..sample_salon("2")
    };
    let catalog = vec![glow.clone(), nails];

    assert_eq!(filter_salons("hair", &catalog), vec![glow]);
    assert_eq!(filter_salons("", &catalog), catalog);
    assert_eq!(filter_salons("SPA", &catalog), filter_salons("spa", &catalog));
}

#[test]
fn test_search_then_book() {
    let ctx = context();

    let results = catalog::search_salons(&ctx.catalog, "massage");
    assert_eq!(results.summary, "1 salons found");
    let salon_id = results.salons[0].id.clone();

    let detail = catalog::get_salon(&ctx.catalog, &salon_id).unwrap();
    assert!(detail.services.iter().any(|s| s.name == "Massage"));

    let err = booking::book_appointment(&ctx.catalog, &salon_id, None).unwrap_err();
    assert_eq!(err.message, "Please select a service to book");

    let confirmation =
        booking::book_appointment(&ctx.catalog, &salon_id, Some("Massage")).unwrap();
    assert_eq!(
        confirmation.message,
        "Your appointment at Serenity Spa & Wellness for Massage has been booked!"
    );

    // Booking does not add to the appointments screen
    let listed = appointments::list_appointments(&ctx.catalog);
    assert_eq!(listed.upcoming.len() + listed.past.len(), 4);
}

#[test]
fn test_home_and_profile_after_signin() {
    let ctx = context();
    auth::login(&ctx.auth, &login_form("ng@gmail.com", "qweqwe")).unwrap();

    let home = catalog::get_home(&ctx.catalog, &ctx.config, &ctx.auth);
    assert_eq!(home.greeting_name, "John Doe");
    let featured: Vec<_> = home.featured.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        featured,
        vec!["Glow Studio", "Serenity Spa & Wellness", "Nail Bar Deluxe"]
    );

    let profile = profile::get_profile(&ctx.auth, &ctx.theme, &ctx.config);
    assert_eq!(profile.user.unwrap().email, "ng@gmail.com");
    assert_eq!(profile.version_label, "Version 1.0.0");
}

fn sample_salon(id: &str) -> Salon {
    let mut salon = salon_mobile_lib::mock_data::salons().remove(0);
    salon.id = id.to_string();
    salon
}
