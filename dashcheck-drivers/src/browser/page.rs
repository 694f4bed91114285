use dashcheck_common::{Result, VerifyError};
use fantoccini::error::CmdError;
use fantoccini::{Client, Locator};
use tracing::debug;

/// High-level wrapper over the session's active document.
pub struct Page {
    client: Client,
}

impl Page {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Navigate to `url`.
    pub(crate) async fn goto(&self, url: &str) -> Result<()> {
        self.client
            .goto(url)
            .await
            .map_err(|e| VerifyError::Navigation(format!("{url}: {e}")))?;
        debug!(%url, "navigation complete");
        Ok(())
    }

    /// Block until some element's text contains `marker`, using the wait
    /// builder's default deadline (30s).
    pub async fn wait_for_text(&self, marker: &str) -> Result<()> {
        let expr = text_contains_xpath(marker);
        match self.client.wait().for_element(Locator::XPath(&expr)).await {
            Ok(_) => {
                debug!(%marker, "marker text visible");
                Ok(())
            }
            Err(CmdError::WaitTimeout) => Err(VerifyError::Timeout(marker.to_string())),
            Err(e) => Err(VerifyError::Session(anyhow::Error::new(e))),
        }
    }

    /// Capture the window as PNG bytes.
    pub async fn screenshot_png(&self) -> Result<Vec<u8>> {
        self.client
            .screenshot()
            .await
            .map_err(|e| VerifyError::Screenshot(format!("capture failed: {e}")))
    }

    /// Page title, for trace diagnostics.
    pub async fn title(&self) -> Result<String> {
        self.client
            .title()
            .await
            .map_err(|e| VerifyError::Session(anyhow::Error::new(e)))
    }

    /// Current URL after redirects, for trace diagnostics.
    pub async fn current_url(&self) -> Result<String> {
        self.client
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(|e| VerifyError::Session(anyhow::Error::new(e)))
    }
}

/// XPath expression matching any element whose text contains `marker`.
fn text_contains_xpath(marker: &str) -> String {
    format!("//*[contains(text(), {})]", xpath_literal(marker))
}

/// Encode arbitrary text as an XPath 1.0 string literal.
///
/// XPath has no escape sequences inside string literals, so text containing
/// both quote kinds must be assembled with `concat(...)`.
fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        return format!("'{text}'");
    }
    if !text.contains('"') {
        return format!("\"{text}\"");
    }

    let mut parts = Vec::new();
    for (i, chunk) in text.split('\'').enumerate() {
        if i > 0 {
            parts.push(r#""'""#.to_string());
        }
        if !chunk.is_empty() {
            parts.push(format!("'{chunk}'"));
        }
    }
    format!("concat({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_uses_single_quotes() {
        assert_eq!(xpath_literal("Panel & Giriş"), "'Panel & Giriş'");
    }

    #[test]
    fn single_quoted_text_switches_to_double_quotes() {
        assert_eq!(xpath_literal("driver's seat"), "\"driver's seat\"");
    }

    #[test]
    fn mixed_quotes_fall_back_to_concat() {
        assert_eq!(
            xpath_literal(r#"it's "fine""#),
            r#"concat('it', "'", 's "fine"')"#
        );
    }

    #[test]
    fn trailing_quote_produces_no_empty_chunk() {
        assert_eq!(xpath_literal(r#"a"b'"#), r#"concat('a"b', "'")"#);
    }

    #[test]
    fn containment_expression_embeds_the_literal() {
        assert_eq!(
            text_contains_xpath("Panel & Giriş"),
            "//*[contains(text(), 'Panel & Giriş')]"
        );
    }
}
