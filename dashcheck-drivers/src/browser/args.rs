/// Window size for captures; the screenshot covers exactly this area.
const WINDOW_SIZE: (u32, u32) = (1280, 800);

/// Construct Chrome command-line arguments for a verification session.
pub fn build_chrome_arguments(headless: bool) -> Vec<String> {
    let mut args = vec![
        "--disable-dev-shm-usage".to_string(),
        "--no-sandbox".to_string(),
        "--disable-extensions".to_string(),
        format!("--window-size={},{}", WINDOW_SIZE.0, WINDOW_SIZE.1),
    ];
    if headless {
        args.push("--headless=new".to_string());
        args.push("--disable-gpu".to_string());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_adds_the_headless_flags() {
        let args = build_chrome_arguments(true);
        assert!(args.iter().any(|a| a == "--headless=new"));
        assert!(args.iter().any(|a| a == "--disable-gpu"));
    }

    #[test]
    fn headful_omits_the_headless_flags() {
        let args = build_chrome_arguments(false);
        assert!(!args.iter().any(|a| a.starts_with("--headless")));
        assert!(!args.iter().any(|a| a == "--disable-gpu"));
    }

    #[test]
    fn base_arguments_are_always_present() {
        for headless in [false, true] {
            let args = build_chrome_arguments(headless);
            assert!(args.iter().any(|a| a == "--no-sandbox"));
            assert!(args.iter().any(|a| a == "--window-size=1280,800"));
        }
    }
}
