use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters a URI encoder escapes: everything outside the unreserved and reserved sets
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// [`URI`] minus the characters that are legal in a local part and echoed back verbatim
const EMAIL: &AsciiSet = &URI
    .remove(b' ')
    .remove(b'%')
    .remove(b'^')
    .remove(b'`')
    .remove(b'{')
    .remove(b'|')
    .remove(b'}');

/// Escape an address so it can be echoed back inside markup.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes.
pub fn encode_email(email: &str) -> String {
    utf8_percent_encode(email, EMAIL).to_string()
}
