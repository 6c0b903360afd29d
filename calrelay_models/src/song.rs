use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SongSearchRequest {
    pub song: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl SongSearchRequest {
    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref().filter(|artist| !artist.is_empty())
    }

    pub fn into_arguments(self) -> Vec<String> {
        let mut arguments = vec![self.song];
        arguments.extend(self.artist.filter(|artist| !artist.is_empty()));
        arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_artist_should_build_single_argument() {
        let request: SongSearchRequest = serde_json::from_str(r#"{"song":"Yesterday"}"#).unwrap();

        assert_eq!(request.into_arguments(), vec!["Yesterday".to_string()]);
    }

    #[test]
    fn with_artist_should_build_song_then_artist() {
        let request = SongSearchRequest {
            song: "Yesterday".to_string(),
            artist: Some("The Beatles".to_string()),
        };

        assert_eq!(
            request.into_arguments(),
            vec!["Yesterday".to_string(), "The Beatles".to_string()]
        );
    }

    #[test]
    fn empty_artist_is_treated_as_absent() {
        let request = SongSearchRequest {
            song: "Yesterday".to_string(),
            artist: Some(String::new()),
        };

        assert_eq!(request.into_arguments().len(), 1);
    }

    #[test]
    fn absent_artist_is_not_serialized() {
        let request = SongSearchRequest {
            song: "Yesterday".to_string(),
            artist: None,
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"song":"Yesterday"}"#
        );
    }
}
