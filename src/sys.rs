//! Access to the host system's time zone.

use alloc::string::String;

use crate::{parsers::is_valid_identifier, BridgeError, BridgeResult};

/// Returns the identifier of the host system's current time zone.
///
/// Fails with [`ErrorKind::EnumerationUnavailable`][crate::ErrorKind::EnumerationUnavailable]
/// when the host does not report a time zone, or reports one that is not a
/// valid identifier.
pub fn system_zone_id() -> BridgeResult<String> {
    let id = iana_time_zone::get_timezone().map_err(|_err| {
        warn!("failed to fetch the system time zone: {_err}");
        BridgeError::enumeration_unavailable().with_message("error fetching the system time zone.")
    })?;
    if !is_valid_identifier(&id) {
        warn!("system time zone {id:?} is not a valid identifier");
        return Err(BridgeError::enumeration_unavailable()
            .with_message("the system time zone is not a valid identifier."));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::system_zone_id;

    #[test]
    fn system_zone_is_valid_when_present() {
        // Not every test host has a configured zone.
        if let Ok(id) = system_zone_id() {
            assert!(crate::parsers::is_valid_identifier(&id));
        }
    }
}
