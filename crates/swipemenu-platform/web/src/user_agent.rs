//! User agent sniffing for platform quirks.

const IOS_DEVICES: [&str; 3] = ["iphone", "ipod", "ipad"];

/// Whether `user_agent` is Safari on an iOS device.
///
/// iOS Safari claims left-edge swipes for history navigation, which fights a
/// left-to-right swipe that opens the menu. Stylesheets key off
/// [`IS_SAFARI`](swipemenu_core::markers::IS_SAFARI) to adjust.
pub fn is_ios_safari(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    IOS_DEVICES.iter().any(|device| user_agent.contains(device)) && user_agent.contains("safari")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ios_safari() {
        assert!(is_ios_safari(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1"
        ));
        assert!(is_ios_safari("Mozilla/5.0 (iPad; CPU OS 16_4) Safari/604.1"));
    }

    #[test]
    fn ignores_desktop_and_android() {
        assert!(!is_ios_safari(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Safari/605.1.15"
        ));
        assert!(!is_ios_safari(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36"
        ));
        assert!(!is_ios_safari("iPhone app webview without the browser token"));
    }
}
