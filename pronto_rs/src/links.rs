//! Outbound deep links: chat composer, mail composer and maps.
//!
//! Builders never fail; an absent phone only changes which scheme the
//! quote link uses (see [`quote_link`]).

use urlencoding::encode;

/// Which WhatsApp host a send link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatClient {
    /// `api.whatsapp.com`, hands off to the installed app.
    Api,
    /// `web.whatsapp.com`, forces the web client on desktop.
    Web,
}

impl ChatClient {
    /// Coarse mobile sniff, good enough to pick a host.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let mobile = ["android", "iphone", "ipad", "ipod"]
            .iter()
            .any(|needle| ua.contains(needle));
        if mobile { ChatClient::Api } else { ChatClient::Web }
    }

    fn host(self) -> &'static str {
        match self {
            ChatClient::Api => "api.whatsapp.com",
            ChatClient::Web => "web.whatsapp.com",
        }
    }
}

/// `https://wa.me/<phone>?text=<message>`
pub fn chat_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", digits(phone), encode(text))
}

/// `https://{api,web}.whatsapp.com/send?phone=<phone>&text=<message>`
pub fn chat_send_link(client: ChatClient, phone: &str, text: &str) -> String {
    format!(
        "https://{}/send?phone={}&text={}",
        client.host(),
        digits(phone),
        encode(text)
    )
}

/// `mailto:` link with an encoded subject and body. Line breaks in the body
/// are sent as CRLF, as RFC 6068 asks for.
pub fn mailto(to: &str, subject: &str, body: &str) -> String {
    let body = body.replace("\r\n", "\n").replace('\n', "\r\n");
    format!("mailto:{to}?subject={}&body={}", encode(subject), encode(&body))
}

/// Quote call-to-action: chat link when a phone is configured, otherwise a
/// mail to `fallback_email` carrying the same message.
pub fn quote_link(phone: Option<&str>, fallback_email: &str, subject: &str, message: &str) -> String {
    match phone.map(str::trim).filter(|p| !p.is_empty()) {
        Some(phone) => chat_link(phone, message),
        None => mailto(fallback_email, subject, message),
    }
}

/// Link that opens the address in Google Maps.
pub fn maps_link(address: &str) -> String {
    format!("https://www.google.com/maps?q={}", encode(address))
}

/// Embeddable (iframe) variant of [`maps_link`].
pub fn maps_embed(address: &str) -> String {
    format!("https://www.google.com/maps?q={}&z=17&output=embed", encode(address))
}

/// `tel:` link. Keeps a leading `+` and the digits.
pub fn tel_link(phone: &str) -> String {
    format!("tel:+{}", digits(phone))
}

/// Human-readable Colombian number: `573144435763` → `+57 314 443 5763`.
/// Anything that is not twelve digits is printed as `+<digits>`.
pub fn display_phone(phone: &str) -> String {
    let digits = digits(phone);
    if digits.len() != 12 {
        return format!("+{digits}");
    }
    format!(
        "+{} {} {} {}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..]
    )
}

/// E.164 digits only; links reject `+`, spaces and dashes.
fn digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chat_link_encodes_message() {
        assert_eq!(
            chat_link("573144435763", "Hola, quiero cotizar"),
            "https://wa.me/573144435763?text=Hola%2C%20quiero%20cotizar"
        );
    }

    #[test]
    fn display_phone_groups_colombian_numbers() {
        assert_eq!(display_phone("573144435763"), "+57 314 443 5763");
        assert_eq!(display_phone("+57 314-443-5763"), "+57 314 443 5763");
        assert_eq!(display_phone("12345"), "+12345");
    }

    #[test]
    fn chat_link_strips_phone_formatting() {
        let href = chat_link("+57 314-443 5763", "x");
        assert!(href.starts_with("https://wa.me/573144435763?"));
    }

    #[test]
    fn send_link_uses_host_for_client() {
        let mobile = ChatClient::from_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
        );
        let desktop = ChatClient::from_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/124.0 Safari/537.36",
        );
        assert_eq!(mobile, ChatClient::Api);
        assert_eq!(desktop, ChatClient::Web);

        assert_eq!(
            chat_send_link(desktop, "573144435763", "¡Hola!"),
            "https://web.whatsapp.com/send?phone=573144435763&text=%C2%A1Hola%21"
        );
        assert!(chat_send_link(mobile, "1", "a").starts_with("https://api.whatsapp.com/send?"));
    }

    #[test]
    fn user_agent_sniff_is_case_insensitive() {
        assert_eq!(ChatClient::from_user_agent("ANDROID 14"), ChatClient::Api);
        assert_eq!(ChatClient::from_user_agent(""), ChatClient::Web);
    }

    #[test]
    fn mailto_encodes_subject_and_crlf_body() {
        assert_eq!(
            mailto("ventas@pronto-office.com", "Cotización", "a\nb"),
            "mailto:ventas@pronto-office.com?subject=Cotizaci%C3%B3n&body=a%0D%0Ab"
        );
    }

    #[test]
    fn quote_link_falls_back_to_mail() {
        let chat = quote_link(Some("573001112233"), "x@y.co", "S", "M");
        assert_eq!(chat, "https://wa.me/573001112233?text=M");

        let mail = quote_link(None, "x@y.co", "S", "M");
        assert_eq!(mail, "mailto:x@y.co?subject=S&body=M");

        let blank = quote_link(Some("  "), "x@y.co", "S", "M");
        assert_eq!(blank, mail);
    }

    #[test]
    fn maps_links() {
        let address = "Calle 14 Nro. 12-31, Bogotá";
        assert_eq!(
            maps_link(address),
            "https://www.google.com/maps?q=Calle%2014%20Nro.%2012-31%2C%20Bogot%C3%A1"
        );
        assert!(maps_embed(address).ends_with("&z=17&output=embed"));
        assert!(maps_embed(address).starts_with(&maps_link(address)));
    }

    #[test]
    fn tel_link_normalizes() {
        assert_eq!(tel_link("+57 314 443 5763"), "tel:+573144435763");
    }
}
