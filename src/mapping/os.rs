// Guest OS identification

use tracing::debug;

use crate::models::GuestInfo;

/// Returns `(os, os_release)`.
///
/// The OS is the guest id, falling back to the guest family; the release is
/// the guest's full OS name. Both are empty without guest info.
pub fn identify_os(guest: Option<&GuestInfo>) -> (String, String) {
    let Some(guest) = guest else {
        debug!("no guest info, os unknown");
        return (String::new(), String::new());
    };

    let os = if !guest.guest_id.is_empty() {
        debug!("using guest id as os");
        guest.guest_id.clone()
    } else if !guest.guest_family.is_empty() {
        debug!("using guest family as os");
        guest.guest_family.clone()
    } else {
        String::new()
    };

    (os, guest.guest_full_name.clone())
}
