//! PDF Chat - Model (HTTP backend)

use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::domain::a001_pdf_chat::controller::{PdfChatBackend, PickedFile};
use contracts::domain::a001_pdf_chat::dto::{
    AskRequest, AskResponse, ASK_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use contracts::shared::error::RequestError;
use gloo_net::http::Request;
use web_sys::{FormData, HtmlInputElement};

/// Файл из `<input type="file">`
#[derive(Debug, Clone)]
pub struct BrowserFile(pub web_sys::File);

impl PickedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size_bytes(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Collect the current selection of a file input, in selection order.
pub fn picked_files(input: &HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// Клиент сервиса документов поверх `fetch`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    api_base: String,
}

impl HttpBackend {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

/// Map an HTTP status to the request outcome; anything but 2xx fails.
fn check_status(status: u16) -> Result<(), RequestError> {
    match RequestError::from_status(status) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Multipart body: every file under the same `pdfs` field, in selection order.
fn build_form(files: &[BrowserFile]) -> Result<FormData, RequestError> {
    let form_data = FormData::new().map_err(|e| RequestError::Build(format!("{e:?}")))?;
    for file in files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file.0, &file.0.name())
            .map_err(|e| RequestError::Build(format!("{e:?}")))?;
    }
    Ok(form_data)
}

fn upload_request(api_base: &str, files: &[BrowserFile]) -> Result<Request, RequestError> {
    Request::post(&api_url(api_base, UPLOAD_PATH))
        .body(build_form(files)?)
        .map_err(|e| RequestError::Build(e.to_string()))
}

fn ask_request(api_base: &str, request: &AskRequest) -> Result<Request, RequestError> {
    // `.json()` also sets `Content-Type: application/json`
    Request::post(&api_url(api_base, ASK_PATH))
        .json(request)
        .map_err(|e| RequestError::Build(e.to_string()))
}

#[async_trait(?Send)]
impl PdfChatBackend for HttpBackend {
    type File = BrowserFile;

    async fn upload(&self, files: &[BrowserFile]) -> Result<(), RequestError> {
        // Body is ignored; only the status matters.
        let response = upload_request(&self.api_base, files)?
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        check_status(response.status())
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, RequestError> {
        let response = ask_request(&self.api_base, request)?
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        check_status(response.status())?;

        response
            .json::<AskResponse>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pdf(name: &str) -> BrowserFile {
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str("%PDF-1.4"));
        BrowserFile(web_sys::File::new_with_str_sequence(&parts, name).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_form_puts_every_file_under_pdfs() {
        let files = vec![pdf("a.pdf"), pdf("b.pdf"), pdf("a.pdf")];
        let form = build_form(&files).unwrap();

        let parts = form.get_all(UPLOAD_FIELD);
        assert_eq!(parts.length(), 3);
        let names: Vec<String> = parts
            .iter()
            .map(|part| part.dyn_into::<web_sys::File>().unwrap().name())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "a.pdf"]);
    }

    #[wasm_bindgen_test]
    fn test_upload_request_targets_upload() {
        let request = upload_request("https://pdf.example.com/", &[pdf("c.pdf")]).unwrap();
        assert_eq!(request.url(), "https://pdf.example.com/upload");
    }

    #[wasm_bindgen_test]
    fn test_ask_request_is_json() {
        let request = ask_request("https://pdf.example.com", &AskRequest::new("What is X?")).unwrap();
        assert_eq!(request.url(), "https://pdf.example.com/ask");
        assert_eq!(
            request.headers().get("content-type").as_deref(),
            Some("application/json")
        );
    }
}
