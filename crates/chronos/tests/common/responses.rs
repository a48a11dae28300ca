//! Canned `generateContent` responses

use serde_json::json;

/// Grounded prediction with two usable sources and one without a link
pub fn grounded_prediction() -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{
                    "text": "Within a decade, grid-scale storage will make renewable power the cheapest option everywhere."
                }]
            },
            "finishReason": "STOP",
            "groundingMetadata": {
                "groundingAttributions": [
                    {"web": {"uri": "https://energy.example/storage", "title": "Storage Outlook"}},
                    {"web": {"title": "Untitled briefing"}},
                    {"web": {"uri": "https://science.example/batteries", "title": "Battery Review"}}
                ]
            }
        }],
        "usageMetadata": {"promptTokenCount": 42, "candidatesTokenCount": 31}
    })
}

/// Prediction without any grounding metadata
pub fn ungrounded_prediction() -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "The future is bright."}]},
            "finishReason": "STOP"
        }]
    })
}

/// A response whose candidate carries no text
pub fn empty_candidate() -> serde_json::Value {
    json!({
        "candidates": [{"content": {"role": "model", "parts": []}, "finishReason": "SAFETY"}]
    })
}

/// Error body as the API returns it
pub fn error_unavailable() -> serde_json::Value {
    json!({
        "error": {
            "code": 503,
            "message": "The model is overloaded. Please try again later.",
            "status": "UNAVAILABLE"
        }
    })
}

/// Error body for a rejected key
pub fn error_invalid_key() -> serde_json::Value {
    json!({
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT"
        }
    })
}
