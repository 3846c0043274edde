use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};
use tracing::debug;

/// The bare-domain URL a `www.` request should move to, if any.
fn canonical_location(host: &str, path_query: &str) -> Option<String> {
    let bare = host.strip_prefix("www.")?;
    (!bare.is_empty()).then(|| format!("https://{bare}{path_query}"))
}

pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let location = req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .and_then(|host| {
            let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
            canonical_location(host, path_query)
        });

    let Some(location) = location else {
        return Ok(next.run(req).await);
    };

    debug!(%location, "Redirecting www host");
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_www_host_redirects_to_bare_domain() {
        assert_eq!(
            canonical_location("www.averyquinn.example", "/#contact"),
            Some("https://averyquinn.example/#contact".to_owned())
        );
        assert_eq!(
            canonical_location("www.averyquinn.example", "/sitemap.xml?x=1"),
            Some("https://averyquinn.example/sitemap.xml?x=1".to_owned())
        );
    }

    #[test]
    fn test_other_hosts_pass_through() {
        assert_eq!(canonical_location("averyquinn.example", "/"), None);
        assert_eq!(canonical_location("localhost:3007", "/"), None);
        assert_eq!(canonical_location("www.", "/"), None);
    }
}
