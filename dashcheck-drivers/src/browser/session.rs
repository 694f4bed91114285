use crate::browser::{args::build_chrome_arguments, page::Page};
use dashcheck_common::{Result, VerifyError};
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;
use webdriver::capabilities::Capabilities;

/// Thin wrapper around a `fantoccini` WebDriver client.
///
/// A session owns exactly one browser instance for the duration of a
/// verification pass. Acquire it with [`BrowserSession::connect`] and
/// release it with [`BrowserSession::close`] on every exit path.
pub struct BrowserSession {
    client: Client,
}

impl BrowserSession {
    /// Connect to a running WebDriver service (Chromedriver) and start a
    /// browser with the given visibility.
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();
        chrome_opts.insert("args".to_string(), json!(build_chrome_arguments(headless)));
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await
            .map_err(|e| VerifyError::Session(anyhow::Error::new(e)))?;
        debug!(%webdriver_url, headless, "webdriver session established");

        Ok(Self { client })
    }

    /// Navigate the session's window to `url` and return a [`Page`] over it.
    pub async fn open(&self, url: &str) -> Result<Page> {
        let page = Page::new(self.client.clone());
        page.goto(url).await?;
        Ok(page)
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client
            .close()
            .await
            .map_err(|e| VerifyError::Session(anyhow::Error::new(e)))?;
        debug!("webdriver session closed");
        Ok(())
    }
}
