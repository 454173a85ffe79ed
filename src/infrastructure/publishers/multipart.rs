// src/infrastructure/publishers/multipart.rs
//! Minimal multipart bodies for the media uploads. Parts are kept in memory.
use bytes::{BufMut, Bytes, BytesMut};

pub struct MultipartBody {
    boundary: String,
    buffer: BytesMut,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: format!("tribune-{}", uuid::Uuid::new_v4().simple()),
            buffer: BytesMut::new(),
        }
    }

    /// Part of a `multipart/related` body (no disposition).
    pub fn related_part(mut self, content_type: &str, data: &[u8]) -> Self {
        self.open_part();
        self.put_line(&format!("Content-Type: {content_type}"));
        self.put_body(data);
        self
    }

    /// File field of a `multipart/form-data` body.
    pub fn file_field(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.open_part();
        self.put_line(&format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\""
        ));
        self.put_line(&format!("Content-Type: {content_type}"));
        self.put_body(data);
        self
    }

    /// Returns the `Content-Type` header value for `kind` (`related` or
    /// `form-data`) together with the finished body.
    pub fn finish(mut self, kind: &str) -> (String, Bytes) {
        self.buffer.put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/{kind}; boundary={}", self.boundary),
            self.buffer.freeze(),
        )
    }

    fn open_part(&mut self) {
        let line = format!("--{}", self.boundary);
        self.put_line(&line);
    }

    fn put_line(&mut self, line: &str) {
        self.buffer.put_slice(line.as_bytes());
        self.buffer.put_slice(b"\r\n");
    }

    fn put_body(&mut self, data: &[u8]) {
        self.buffer.put_slice(b"\r\n");
        self.buffer.put_slice(data);
        self.buffer.put_slice(b"\r\n");
    }
}
