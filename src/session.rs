//! Per-client detector state.
//!
//! Each client owns one `GestureSession`; nothing is shared between sessions.
//! A session must see its frames in arrival order.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::GestureError;
use crate::gesture::{Debouncer, GestureClassifier, GestureLabel};
use crate::hand::{Hand, LandmarkIndex};
use crate::protocol::FrameMessage;
use crate::tracker::{DirectionSmoother, PointerSmoother};

/// Validated hands of one camera frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub hands: Vec<Hand>,
}

impl Frame {
    pub fn new(width: u32, height: u32, hands: Vec<Hand>) -> Self {
        Self {
            width,
            height,
            hands,
        }
    }
}

/// Smoothed pointer in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    /// Unit direction of recent pointer motion, if it has moved yet
    pub direction: Option<(f32, f32)>,
}

/// What one frame produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// This frame's classification
    pub label: GestureLabel,
    /// Set when the debounce run completed on this frame
    pub emitted: Option<GestureLabel>,
    pub pointer: Option<PointerSample>,
}

pub struct GestureSession {
    classifier: GestureClassifier,
    pointer: PointerSmoother,
    direction_filter: DirectionSmoother,
    debouncer: Debouncer,
    last_pointer: Option<(i32, i32)>,
    direction: Option<(f32, f32)>,
}

impl GestureSession {
    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: GestureClassifier::from_config(&config.classifier),
            pointer: PointerSmoother::from_config(&config.pointer),
            direction_filter: DirectionSmoother::from_config(&config.pointer),
            debouncer: Debouncer::from_config(&config.debounce),
            last_pointer: None,
            direction: None,
        }
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn process(&mut self, frame: &Frame) -> FrameOutcome {
        let label = self.classifier.classify(&frame.hands);
        let pointer = self.track_pointer(frame);
        let emitted = self.debouncer.push(label);
        FrameOutcome {
            label,
            emitted,
            pointer,
        }
    }

    /// Index fingertip of the first hand, smoothed
    fn track_pointer(&mut self, frame: &Frame) -> Option<PointerSample> {
        let hand = frame.hands.first()?;
        let (raw_x, raw_y) = hand
            .get(LandmarkIndex::IndexTip)
            .to_pixel(frame.width, frame.height);
        let (x, y) = self.pointer.apply(raw_x as f32, raw_y as f32);

        if let Some((lx, ly)) = self.last_pointer {
            if let Some(dir) = self.direction_filter.apply((x - lx) as f32, (y - ly) as f32) {
                self.direction = Some(dir);
            }
        }
        self.last_pointer = Some((x, y));

        Some(PointerSample {
            x,
            y,
            direction: self.direction,
        })
    }

    pub fn reset(&mut self) {
        self.classifier.reset();
        self.pointer.reset();
        self.direction_filter.reset();
        self.debouncer.clear();
        self.last_pointer = None;
        self.direction = None;
    }
}

/// Sessions keyed by client id
pub struct SessionRegistry {
    config: Config,
    sessions: HashMap<String, GestureSession>,
}

impl SessionRegistry {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, client_id: &str) -> Option<&GestureSession> {
        self.sessions.get(client_id)
    }

    /// Route a frame to its client's session, creating it on first contact.
    ///
    /// A frame with malformed hands classifies as `None` and leaves the
    /// session untouched.
    pub fn process(&mut self, msg: &FrameMessage) -> Result<FrameOutcome, GestureError> {
        if msg.client_id.is_empty() {
            return Err(GestureError::MissingClientId);
        }

        let config = &self.config;
        let session = self
            .sessions
            .entry(msg.client_id.clone())
            .or_insert_with(|| {
                info!("new session for client {}", msg.client_id);
                GestureSession::from_config(config)
            });

        let frame = match msg.to_frame() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("client {}: frame rejected: {}", msg.client_id, e);
                return Ok(FrameOutcome {
                    label: GestureLabel::None,
                    emitted: None,
                    pointer: None,
                });
            }
        };

        let outcome = session.process(&frame);
        debug!("client {}: {}", msg.client_id, outcome.label);
        if let Some(label) = outcome.emitted {
            info!("client {}: gesture {}", msg.client_id, label);
        }
        Ok(outcome)
    }

    /// Forget a client (disconnect)
    pub fn remove(&mut self, client_id: &str) -> bool {
        self.sessions.remove(client_id).is_some()
    }
}
