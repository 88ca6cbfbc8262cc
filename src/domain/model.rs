use serde::Deserialize;
use std::collections::BTreeMap;

/// Wire shape of `GET {base}/breeds/list/all`. Only `message` is consumed;
/// the `status` field and anything else the API adds are ignored on decode.
///
/// `message` maps each breed name to its sub-breeds. Sub-breeds are carried
/// by the payload but unused here. Keys of a `BTreeMap` are unique and
/// iterate in ascending lexicographic order, which is exactly the ordering
/// contract of the breed list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreedListResponse {
    pub message: BTreeMap<String, Vec<String>>,
}

impl BreedListResponse {
    /// Breed names, sorted ascending on the raw string.
    pub fn into_breed_names(self) -> Vec<String> {
        self.message.into_keys().collect()
    }
}

/// Wire shape of `GET {base}/breed/{breed}/images/random`. `message` holds
/// the image URL, returned to callers unmodified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreedImageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_names_sorted_and_unique() {
        let response: BreedListResponse = serde_json::from_str(
            r#"{"message":{"beagle":["tibetan"],"akita":[],"whippet":[]},"status":"success"}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_breed_names(),
            vec!["akita", "beagle", "whippet"]
        );
    }

    #[test]
    fn test_empty_message_yields_empty_list() {
        let response: BreedListResponse =
            serde_json::from_str(r#"{"message":{},"status":"success"}"#).unwrap();

        assert!(response.into_breed_names().is_empty());
    }

    #[test]
    fn test_missing_message_is_a_decode_failure() {
        let result = serde_json::from_str::<BreedListResponse>(r#"{"status":"success"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_image_url_passes_through_unmodified() {
        let response: BreedImageResponse = serde_json::from_str(
            r#"{"message":"https://images.dog.ceo/x.jpg","status":"success"}"#,
        )
        .unwrap();

        assert_eq!(response.message, "https://images.dog.ceo/x.jpg");
    }
}
