use wasm_bindgen::JsCast;

pub const PDF_MIME: &str = "application/pdf";

pub fn payslip_filename(month: &str, year: i32) -> String {
    let month = month
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();
    format!("salary_slip_{}_{}.pdf", month, year)
}

/// Saves `bytes` through a temporary object URL and a synthetic anchor click.
pub fn trigger_file_download(filename: &str, bytes: &[u8], mime: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payslip_filename_uses_month_and_year() {
        assert_eq!(payslip_filename("March", 2024), "salary_slip_March_2024.pdf");
    }

    #[test]
    fn payslip_filename_replaces_unsafe_characters() {
        assert_eq!(payslip_filename(" 03/x ", 2024), "salary_slip_03_x_2024.pdf");
    }
}
