use web_sys as web;

const SCREEN_ID: &str = "loading-screen";
const BAR_ID: &str = "loading-progress";
const LABEL_ID: &str = "loading-label";

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SCREEN_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Update the progress bar width and its label text.
pub fn set_progress(document: &web::Document, percent: u32) {
    if let Some(bar) = document.get_element_by_id(BAR_ID) {
        _ = bar.set_attribute("style", &format!("width:{}%", percent));
    }
    if let Some(label) = document.get_element_by_id(LABEL_ID) {
        label.set_text_content(Some(&format!("Loading... {}%", percent)));
    }
}
