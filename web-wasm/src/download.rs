//! Blob URL 経由のファイルダウンロード

use trade_tracker_common::export::CSV_MIME;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// CSV文字列をファイルとしてダウンロードさせる
pub fn download_csv(file_name: &str, csv: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}
