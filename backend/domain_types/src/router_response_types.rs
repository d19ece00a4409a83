#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub response: bytes::Bytes,
}

impl Response {
    pub fn new(status_code: u16, response: impl Into<bytes::Bytes>) -> Self {
        Self {
            status_code,
            response: response.into(),
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.response).into_owned()
    }
}
