use crate::Result;

use cinder_core::{driver::Driver, Error};

use url::Url;

/// Open the driver named by a connection URL's scheme.
pub(super) fn driver_for(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "memory" => connect_memory(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "memory")]
fn connect_memory(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(cinder_driver_memory::Memory::connect(url)?))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`memory` feature not enabled"))
}
