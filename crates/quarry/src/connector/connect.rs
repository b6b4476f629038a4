use quarry_core::{
    async_trait,
    driver::{Connection, Driver},
    Error, Result,
};

use url::Url;

/// A driver picked from the scheme of a connection URL.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        let driver = match url.scheme() {
            "mysql" => mysql(&url)?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database `{scheme}`"
                )))
            }
        };

        Ok(Self { url, driver })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Driver for Connect {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }
}

#[cfg(feature = "mysql")]
fn mysql(url: &Url) -> Result<Box<dyn Driver>> {
    Ok(Box::new(quarry_driver_mysql::MySql::new(url.as_str())?))
}

#[cfg(not(feature = "mysql"))]
fn mysql(_url: &Url) -> Result<Box<dyn Driver>> {
    Err(quarry_core::err!("`mysql` feature not enabled"))
}
