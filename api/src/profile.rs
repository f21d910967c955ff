//! Private profile resource. Requires a bearer token.

use jobdeck_types::{Envelope, Profile};

use crate::{ApiContext, ApiError, read_envelope};

pub async fn show(ctx: &ApiContext) -> Result<Envelope<Profile>, ApiError> {
    read_envelope(ctx.get("/api/private/profile")?).await
}

pub async fn update(ctx: &ApiContext, profile: &Profile) -> Result<Envelope<Profile>, ApiError> {
    read_envelope(ctx.put("/api/private/profile")?.json(profile)).await
}

#[cfg(test)]
mod tests {
    use jobdeck_types::Profile;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::ApiContext;

    fn profile_json() -> serde_json::Value {
        serde_json::json!({
            "id": 9,
            "name": "User",
            "email": "user@example.com",
            "phone": "+880123",
            "address": null,
            "about": "Hi."
        })
    }

    #[tokio::test]
    async fn show_decodes_profile_with_optional_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/private/profile"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": profile_json()})),
            )
            .mount(&server)
            .await;

        let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
        let profile = super::show(&ctx).await.unwrap().data.expect("profile");
        assert_eq!(profile.name, "User");
        assert!(profile.address.is_none());
    }

    #[tokio::test]
    async fn update_puts_the_profile_body() {
        let server = MockServer::start().await;
        let profile: Profile = serde_json::from_value(profile_json()).unwrap();

        Mock::given(method("PUT"))
            .and(path("/api/private/profile"))
            .and(body_json(&profile))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": profile_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
        let envelope = super::update(&ctx, &profile).await.unwrap();
        assert!(envelope.data.is_some());
    }
}
