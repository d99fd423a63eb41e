mod common;
use common::PNG_BYTES;
use empmanager::config::Config;
use empmanager::core::image::{DataUriEncoder, ImageEncoder, mime_of};
use empmanager::core::session::{AuthContext, login, logout, require_login};
use empmanager::errors::AppError;
use empmanager::storage::{MemorySlots, SESSION_KEY};

#[test]
fn test_guard_blocks_until_login() {
    let cfg = Config::default();
    let mut slots = MemorySlots::new();

    let ctx = AuthContext::from_slots(&slots, &cfg);
    assert!(matches!(require_login(&ctx), Err(AppError::NotLoggedIn)));

    login(&mut slots, &cfg, "admin", "admin123").expect("login");
    assert_eq!(slots.peek(SESSION_KEY), Some("true"));

    let ctx = AuthContext::from_slots(&slots, &cfg);
    assert!(ctx.logged_in);
    assert!(require_login(&ctx).is_ok());
}

#[test]
fn test_logout_clears_flag() {
    let cfg = Config::default();
    let mut slots = MemorySlots::new().with_slot(SESSION_KEY, "true");

    logout(&mut slots).expect("logout");

    assert_eq!(slots.peek(SESSION_KEY), None);
    let ctx = AuthContext::from_slots(&slots, &cfg);
    assert!(require_login(&ctx).is_err());
}

#[test]
fn test_wrong_credentials_leave_session_untouched() {
    let cfg = Config::default();
    let mut slots = MemorySlots::new();

    let res = login(&mut slots, &cfg, "admin", "wrong");
    assert!(matches!(res, Err(AppError::InvalidCredentials)));

    let res = login(&mut slots, &cfg, "", "admin123");
    assert!(matches!(res, Err(AppError::InvalidCredentials)));

    assert_eq!(slots.peek(SESSION_KEY), None);
}

#[test]
fn test_flag_other_than_true_is_logged_out() {
    let cfg = Config::default();
    let slots = MemorySlots::new().with_slot(SESSION_KEY, "yes");

    assert!(!AuthContext::from_slots(&slots, &cfg).logged_in);
}

#[test]
fn test_unreadable_session_counts_as_logged_out() {
    let cfg = Config::default();
    let mut slots = MemorySlots::new().with_slot(SESSION_KEY, "true");
    slots.set_available(false);

    assert!(!AuthContext::from_slots(&slots, &cfg).logged_in);
}

#[test]
fn test_guard_disabled_by_config() {
    let cfg = Config {
        require_login: false,
        ..Config::default()
    };
    let slots = MemorySlots::new();

    let ctx = AuthContext::from_slots(&slots, &cfg);
    assert!(!ctx.logged_in);
    assert!(require_login(&ctx).is_ok());
}

#[test]
fn test_png_is_encoded_as_data_uri() {
    let uri = DataUriEncoder.encode(PNG_BYTES).expect("png accepted");

    assert!(uri.starts_with("data:image/"));
    assert!(uri.contains(";base64,iVBORw0KGgo"));
    assert!(mime_of(&uri).is_some_and(|m| m.starts_with("image/")));
}

#[test]
fn test_non_image_is_rejected() {
    let res = DataUriEncoder.encode(b"just some text, not a picture");
    assert!(matches!(res, Err(AppError::InvalidImage(_))));

    let res = DataUriEncoder.encode(&[]);
    assert!(matches!(res, Err(AppError::InvalidImage(_))));
}

#[test]
fn test_mime_of() {
    assert_eq!(mime_of("data:image/jpeg;base64,AAAA"), Some("image/jpeg"));
    assert_eq!(mime_of("data:;base64,AAAA"), None);
    assert_eq!(mime_of("https://example.com/a.png"), None);
}
