use contracts::contact::ContactRequest;
use gloo_net::http::Request;

/// Send a contact message to the mail relay
///
/// Succeeds only when the relay answers with a 2xx status.
pub async fn send_contact(endpoint: &str, request: &ContactRequest) -> Result<(), String> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Contact relay rejected message: {}", response.status()));
    }

    Ok(())
}
