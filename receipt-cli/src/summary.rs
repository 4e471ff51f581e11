use receipt_core::ReceiptStore;

/// Plain-text view of the store: every field, the derived flags, then any
/// validation errors in key order.
pub fn render_summary(store: &ReceiptStore) -> String {
    let receipt_number = match store.receipt_number() {
        "" => "—",
        number => number,
    };

    let mut out = store.form_data().to_string();
    out.push_str(&summary_line("Has data:", yes_no(store.has_data())));
    out.push_str(&summary_line("Valid:", yes_no(store.is_valid())));
    out.push_str(&summary_line("Receipt number:", receipt_number));

    if !store.errors().is_empty() {
        out.push_str("Errors:\n");
        for (key, message) in store.errors() {
            out.push_str(&format!("  {key}: {message}\n"));
        }
    }

    out
}

fn summary_line(
    label: &str,
    value: &str,
) -> String {
    format!("{label:<18}{value}\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
