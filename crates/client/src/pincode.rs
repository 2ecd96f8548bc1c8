//! PIN-code to state/district resolution via the common services host.

use onboard_core::sections::address::PincodeResolution;

use crate::error::ClientError;
use crate::http::OnboardClient;

impl OnboardClient {
    /// Resolve a PIN code to its state and district. Returns `Ok(None)`
    /// without touching the network unless the input is exactly six digits,
    /// matching the gate the address form applies.
    pub async fn resolve_pincode(
        &self,
        pincode: &str,
    ) -> Result<Option<PincodeResolution>, ClientError> {
        let pincode = pincode.trim();
        if pincode.len() != 6 || !pincode.chars().all(|c| c.is_ascii_digit()) {
            return Ok(None);
        }
        let url = self.common_url(&format!("get/{pincode}"));
        self.get_json(&url).await.map(Some)
    }
}
