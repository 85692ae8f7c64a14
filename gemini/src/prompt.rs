use carousel_schema::{DESCRIPTION_MAX_LENGTH, SUBTITLE_MAX_LENGTH, TITLE_MAX_LENGTH};

use crate::types::{Content, GenerateContentRequest, Part};

/// Fixed instruction block sent ahead of the topic text.
///
/// The slide and element counts named here are targets for the generator,
/// not limits the validator enforces.
pub fn generation_rules() -> String {
    format!(
        "\
Create a Carousel of slides following these rules

Response Shape Instructions:
 - Respond with a single JSON object of the form {{\"slides\": [{{\"elements\": [...]}}]}}.
 - Each element is an object with the fields 'type', 'text' and 'maxLength'.
 - Respect the shape and only use the allowed values for element type, which are 'Title', 'Subtitle' and 'Description'.
 - Respect the 'maxLength' value which is the maximum number of characters in a given field. Write less than 70% of that number.
 - 'maxLength' is {TITLE_MAX_LENGTH} for Title, {SUBTITLE_MAX_LENGTH} for Subtitle and {DESCRIPTION_MAX_LENGTH} for Description.

Guidelines:
 - Create 8-15 slides.
 - Each slide has 2-3 different elements. E.g. [Title, Description], or [Title, Subtitle], or [Subtitle, Description].
 - Ensure all elements in that slide are related to the topic provided in the prompt.
 - Adapt, reorganize, and rephrase the content to fit the slides format.
 - Add Emojis to the text in Title, Subtitle, and Description.
 - Don't add slide numbers.
 - Description element text should be short.
"
    )
}

/// Build the request payload: the fixed rules first, then the caller's
/// topic text verbatim as the second segment. The topic is passed through
/// unvalidated; a blank or malformed prompt relies on the model's own
/// behavior.
pub fn build_request(topic: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part::text(generation_rules()), Part::text(topic)],
        }],
    }
}
