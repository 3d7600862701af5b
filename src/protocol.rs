//! JSON messages exchanged with the landmark source and gesture consumers.
//!
//! Frames arrive one JSON object per line; emitted gestures leave as
//! `{"gesture": "<label>"}`.

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::gesture::GestureLabel;
use crate::hand::{Hand, Handedness};
use crate::session::Frame;

/// Landmark source → engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameMessage {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub hands: Vec<HandMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandMessage {
    /// "Left" or "Right", screen-relative
    pub handedness: String,
    /// `[x, y, z]` per landmark, normalized, in landmark index order
    pub landmarks: Vec<[f32; 3]>,
}

/// Engine → consumer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GestureMessage {
    pub gesture: GestureLabel,
}

impl HandMessage {
    pub fn to_hand(&self) -> Result<Hand, GestureError> {
        let handedness: Handedness = self.handedness.parse()?;
        Hand::from_points(handedness, &self.landmarks)
    }
}

impl FrameMessage {
    /// Validate every hand; one bad hand rejects the whole frame.
    pub fn to_frame(&self) -> Result<Frame, GestureError> {
        let hands = self
            .hands
            .iter()
            .map(HandMessage::to_hand)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Frame::new(self.width, self.height, hands))
    }
}

/// Parse one JSON-lines record.
pub fn parse_frame_line(line: &str) -> anyhow::Result<FrameMessage> {
    let msg = serde_json::from_str(line.trim())?;
    Ok(msg)
}

pub fn encode_gesture(label: GestureLabel) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&GestureMessage { gesture: label })?)
}
