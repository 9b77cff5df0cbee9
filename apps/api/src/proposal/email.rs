//! E-mail delivery status. Delivery itself is not wired to a provider: when the
//! user asks for an e-mail, the response explains where it would go.

use crate::proposal::request::{LanguageMode, ProposalRequest};

/// Environment variable an e-mail provider key would be read from.
pub const EMAIL_PROVIDER_KEY_VAR: &str = "RESEND_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailStatus {
    pub sent: bool,
    pub message: Option<String>,
}

/// Address the proposal would be sent to: the extra address if given,
/// otherwise the contact e-mail.
pub fn target_address(request: &ProposalRequest) -> Option<&str> {
    [request.email_to_send.as_str(), request.contact_email.as_str()]
        .into_iter()
        .find(|addr| !addr.is_empty())
}

pub fn delivery_status(request: &ProposalRequest) -> EmailStatus {
    let message = if request.send_email {
        target_address(request).map(|target| match request.language_mode {
            LanguageMode::En => format!(
                "Email feature ready for {target} - configure {EMAIL_PROVIDER_KEY_VAR} to enable"
            ),
            LanguageMode::Pl | LanguageMode::Both => format!(
                "Funkcja email gotowa dla {target} - skonfiguruj {EMAIL_PROVIDER_KEY_VAR} aby włączyć"
            ),
        })
    } else {
        None
    };

    EmailStatus {
        sent: false,
        message,
    }
}
