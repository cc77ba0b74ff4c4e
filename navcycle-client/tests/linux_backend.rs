#![cfg(all(unix, not(target_os = "macos")))]

use navcycle_client::config::ClientConfig;
use navcycle_client::notify::{ChannelRegistry, Presenter};
use navcycle_client::platform::linux::LinuxPlatform;
use navcycle_client::platform::linux::notify::{icon_name, urgency_for};
use navcycle_shared::Icon;
use navcycle_shared::notification::{Importance, NotificationChannel};
use notify_rust::Urgency;

#[test]
fn channel_registration_keeps_latest_distinct_channel() {
    let platform = LinuxPlatform::new(&ClientConfig::default());
    assert_eq!(platform.channel(), None);
    assert!(platform.channels().is_some());

    let nav = NotificationChannel::navigation();
    platform.register_channel(&nav);
    assert_eq!(platform.channel(), Some(nav.clone()));

    platform.register_channel(&nav);
    assert_eq!(platform.channel(), Some(nav.clone()));

    let quiet = NotificationChannel {
        importance: Importance::Low,
        ..nav.clone()
    };
    platform.register_channel(&quiet);
    let stored = platform.channel().unwrap();
    assert_eq!(stored, quiet);
    assert_eq!(stored.importance, Importance::Low);
    assert_eq!(stored.name, nav.name);
}

#[test]
fn importance_maps_to_urgency() {
    let mut channel = NotificationChannel::navigation();
    assert_eq!(urgency_for(Some(&channel)), Urgency::Normal);

    channel.importance = Importance::Low;
    assert_eq!(urgency_for(Some(&channel)), Urgency::Low);

    channel.importance = Importance::Default;
    assert_eq!(urgency_for(Some(&channel)), Urgency::Normal);

    assert_eq!(urgency_for(None), Urgency::Normal);
}

#[test]
fn icon_prefers_bundled_png_over_theme() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("arrow_right_turn.png");
    std::fs::write(&png, b"\x89PNG").unwrap();

    assert_eq!(
        icon_name(Some(dir.path()), Icon::ArrowRightTurn),
        png.display().to_string()
    );
    // No bundled file for this one.
    assert_eq!(icon_name(Some(dir.path()), Icon::GasStation), "mark-location");
    assert_eq!(icon_name(None, Icon::ArrowStraight), "go-up");
}
