// Compatibility API: HTTP caller around the matching engine.
// Owns input validation and document text extraction; scoring lives in `matching`.

pub mod documents;
pub mod handlers;
