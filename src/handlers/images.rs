//! Pass-through proxy for product images hosted on an external server.

use actix_web::{web, HttpResponse};

pub struct ImageProxy {
    client: reqwest::Client,
    base_url: String,
}

impl ImageProxy {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        ImageProxy { client, base_url }
    }

    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

/// GET /images/{name}
///
/// Fetches the named file from the configured upstream and forwards the
/// bytes as `image/jpeg`. Any upstream problem answers 500 with a generic
/// body; the detail goes to the log only.
pub async fn get_image(proxy: web::Data<ImageProxy>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    let url = proxy.url_for(&name);

    match proxy.client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => match resp.bytes().await {
            Ok(bytes) => HttpResponse::Ok().content_type("image/jpeg").body(bytes),
            Err(e) => {
                log::error!("failed to read image body from {}: {}", url, e);
                image_error()
            }
        },
        Ok(resp) => {
            log::error!("upstream answered {} for {}", resp.status(), url);
            image_error()
        }
        Err(e) => {
            log::error!("failed to fetch {}: {}", url, e);
            image_error()
        }
    }
}

fn image_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": "error loading image"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_base_and_name() {
        let proxy = ImageProxy::new(
            reqwest::Client::new(),
            "https://images.example.com".to_string(),
        );
        assert_eq!(
            proxy.url_for("widget.jpg"),
            "https://images.example.com/widget.jpg"
        );
    }

    #[test]
    fn url_for_tolerates_trailing_slash() {
        let proxy = ImageProxy::new(
            reqwest::Client::new(),
            "https://images.example.com/".to_string(),
        );
        assert_eq!(
            proxy.url_for("widget.jpg"),
            "https://images.example.com/widget.jpg"
        );
    }
}
