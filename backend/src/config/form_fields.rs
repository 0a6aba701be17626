use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Where finished registrations are forwarded. Public-write collection form,
/// no secret attached.
pub const FORM_ENDPOINT: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdZRR7wg1FmZJMWb-b8rua2HTo38PyM8kbelSUBydDy6v3rfQ/formResponse";

/// Field keys assigned by the collection form, mapped back to the names the
/// rest of the system knows them by. `updates` is a plain key the upstream
/// form ignores; everything else is an entry token it collects.
pub static FORM_FIELDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert("entry.1041859775", "full_name");
    map.insert("entry.2096901865", "email");
    map.insert("entry.707219350", "phone_number");
    map.insert("updates", "wants_updates");

    // Multi-select, repeated key on the wire
    map.insert("entry.2116844099", "interested_services");

    map.insert("entry.281612395", "platform_feedback");
    map.insert("entry.1288792702", "wants_to_be_tasker");
    map.insert("entry.715124632", "wants_beta_access");

    map
});

pub fn semantic_name(wire_id: &str) -> Option<&'static str> {
    FORM_FIELDS.get(wire_id).copied()
}
