//! Recorded Input Replay
//!
//! Drives an [`InputTranslator`] from a script of recorded frames, the same
//! way a host loop would call it once per frame. Scripts are TOML or JSON:
//!
//! ```toml
//! [[frames]]
//! held = ["ShiftLeft", "H"]
//!
//! [[frames]]
//! held = ["ShiftLeft"]          # H released -> "H"
//! motion = { x = 10, y = 4 }
//! held_buttons = ["Left"]       # press, suppressed by default
//!
//! [[frames]]
//! held_buttons = []             # release -> one click
//! wheel = { x = 10, y = 4, dy = -1.0 }
//! resize = { width = 120, height = 40 }
//! ```
//!
//! Within a frame the translator sees keys, motion, buttons, wheel and
//! resize in that order.

use crate::input::{
    FrameSnapshot, InputTranslator, MessageSink, MouseButtonInput, MouseMotion, MouseWheel,
    PhysicalKey, PhysicalMouseButton, PolledInput, WindowSize,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Sequence of recorded frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Frames in playback order
    #[serde(default)]
    pub frames: Vec<ReplayFrame>,
}

/// Host input captured during one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayFrame {
    /// Keys held at the end of the frame
    pub held: Vec<PhysicalKey>,

    /// Released keys, in host order
    ///
    /// When absent, releases are derived by diffing `held` against the
    /// previous frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<Vec<PhysicalKey>>,

    /// Pointer position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<MouseMotion>,

    /// Explicit button transitions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<MouseButtonInput>,

    /// Buttons held at the end of the frame; transitions are derived at the
    /// current pointer position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_buttons: Option<Vec<PhysicalMouseButton>>,

    /// Wheel movement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel: Option<MouseWheel>,

    /// Window resize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize: Option<WindowSize>,
}

impl ReplayScript {
    /// Load a script, choosing the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read replay script: {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => anyhow::bail!(
                "Unsupported replay script extension: {} (expected .toml or .json)",
                path.display()
            ),
        }
    }

    /// Parse a TOML script
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse replay script (TOML)")
    }

    /// Parse a JSON script
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse replay script (JSON)")
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the script has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Replay outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Frames played
    pub frames: usize,
    /// Messages pushed to the sink
    pub messages: usize,
}

/// Plays frames through a translator
pub struct Replayer<S> {
    translator: InputTranslator<S>,
    polled: PolledInput,
    pointer: (i32, i32),
}

impl<S: MessageSink> Replayer<S> {
    /// Create a replayer with no keys or buttons held and the pointer at the origin
    pub fn new(translator: InputTranslator<S>) -> Self {
        Self {
            translator,
            polled: PolledInput::new(),
            pointer: (0, 0),
        }
    }

    /// Play one frame; returns the number of messages pushed
    pub fn play_frame(&mut self, frame: &ReplayFrame) -> usize {
        let mut emitted = 0;

        // Held state always advances so later frames diff correctly
        let polled = self.polled.next_frame(frame.held.iter().copied());
        let snapshot = match &frame.released {
            Some(released) => {
                FrameSnapshot::from_parts(frame.held.iter().copied(), released.iter().copied())
            }
            None => polled,
        };
        emitted += self.translator.handle_key_press(&snapshot);

        if let Some(motion) = frame.motion {
            self.pointer = (motion.x, motion.y);
            emitted += self.translator.handle_mouse_motion(motion);
        }

        for button in &frame.buttons {
            emitted += self.translator.handle_mouse_button(*button, &snapshot);
        }

        if let Some(held_buttons) = &frame.held_buttons {
            let (x, y) = self.pointer;
            for button in self.polled.next_buttons(held_buttons.iter().copied(), x, y) {
                emitted += self.translator.handle_mouse_button(button, &snapshot);
            }
        }

        if let Some(wheel) = frame.wheel {
            emitted += self.translator.handle_mouse_wheel(wheel, &snapshot);
        }

        if let Some(size) = frame.resize {
            emitted += self.translator.handle_window_size(size);
        }

        emitted
    }

    /// Play every frame of a script in order
    pub fn play(&mut self, script: &ReplayScript) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for (index, frame) in script.frames.iter().enumerate() {
            let emitted = self.play_frame(frame);
            debug!("Replay frame {}: {} message(s)", index, emitted);

            summary.frames += 1;
            summary.messages += emitted;
        }

        info!(
            "Replay finished: {} frame(s), {} message(s)",
            summary.frames, summary.messages
        );

        summary
    }

    /// Translator being driven
    pub fn translator(&self) -> &InputTranslator<S> {
        &self.translator
    }

    /// Release the translator (and with it the sink)
    pub fn into_translator(self) -> InputTranslator<S> {
        self.translator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        with_filter_mouse_pressed, KeyType, MouseButton, RecordingSink, UiMessage, WheelDirection,
    };
    use std::io::Write;

    fn replayer() -> Replayer<RecordingSink> {
        Replayer::new(InputTranslator::with_defaults(RecordingSink::new()))
    }

    fn key_runes(messages: &[UiMessage]) -> Vec<String> {
        messages
            .iter()
            .filter_map(|msg| match msg {
                UiMessage::Key(key) => Some(key.runes.iter().collect()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_toml_script() {
        let script = ReplayScript::from_toml_str(
            r#"
            [[frames]]
            held = ["shiftleft", "h"]

            [[frames]]
            held = ["ShiftLeft"]
            motion = { x = 10, y = 4 }
            resize = { width = 120, height = 40 }
            "#,
        )
        .unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(script.frames[0].held, vec![PhysicalKey::ShiftLeft, PhysicalKey::H]);
        assert_eq!(script.frames[1].motion, Some(MouseMotion { x: 10, y: 4 }));
        assert!(script.frames[1].released.is_none());
    }

    #[test]
    fn test_parse_json_script() {
        let script = ReplayScript::from_json_str(
            r#"{"frames": [{"released": ["Enter"], "wheel": {"x": 0, "y": 0, "dy": 2.0}}]}"#,
        )
        .unwrap();

        assert_eq!(script.frames[0].released, Some(vec![PhysicalKey::Enter]));
        assert!(script.frames[0].held.is_empty());
    }

    #[test]
    fn test_unknown_key_in_script() {
        let err = ReplayScript::from_toml_str("[[frames]]\nheld = [\"Hyper\"]\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown key name: Hyper"));
    }

    #[test]
    fn test_derived_releases() {
        let script = ReplayScript::from_toml_str(
            r#"
            [[frames]]
            held = ["ShiftLeft", "H"]

            [[frames]]
            held = ["ShiftLeft", "I"]

            [[frames]]
            held = []
            "#,
        )
        .unwrap();

        let mut replayer = replayer();
        let summary = replayer.play(&script);

        assert_eq!(summary.frames, 3);
        assert_eq!(summary.messages, 2);
        // The final frame releases I without Shift held
        assert_eq!(key_runes(&replayer.translator().sink().messages()), vec!["H", "i"]);
    }

    #[test]
    fn test_explicit_releases() {
        let frame = ReplayFrame {
            held: vec![PhysicalKey::ControlLeft],
            released: Some(vec![PhysicalKey::C, PhysicalKey::Tab]),
            ..Default::default()
        };

        let mut replayer = replayer();
        assert_eq!(replayer.play_frame(&frame), 2);

        let messages = replayer.translator().sink().messages();
        match messages.as_slice() {
            [UiMessage::Key(first), UiMessage::Key(second)] => {
                assert_eq!(first.key_type, KeyType::CtrlC);
                assert_eq!(second.key_type, KeyType::Tab);
            }
            other => panic!("Expected two Key messages, got {:?}", other),
        }
    }

    #[test]
    fn test_held_buttons_click() {
        let frames = vec![
            ReplayFrame {
                motion: Some(MouseMotion { x: 3, y: 7 }),
                held_buttons: Some(vec![PhysicalMouseButton::Left]),
                ..Default::default()
            },
            ReplayFrame {
                held_buttons: Some(vec![]),
                ..Default::default()
            },
        ];
        let script = ReplayScript { frames };

        let mut replayer = replayer();
        replayer.play(&script);

        let messages = replayer.translator().sink().messages();
        match messages.as_slice() {
            [UiMessage::MouseMotion(_), UiMessage::MouseButton(click)] => {
                assert_eq!(click.button, MouseButton::Left);
                assert_eq!((click.x, click.y), (3, 7));
            }
            other => panic!("Expected motion then click, got {:?}", other),
        }
    }

    #[test]
    fn test_held_buttons_without_filter() {
        let translator =
            InputTranslator::new(RecordingSink::new(), vec![with_filter_mouse_pressed(false)]);
        let mut replayer = Replayer::new(translator);

        let script = ReplayScript::from_toml_str(
            r#"
            [[frames]]
            held_buttons = ["Right"]

            [[frames]]
            held_buttons = []
            "#,
        )
        .unwrap();

        assert_eq!(replayer.play(&script).messages, 2);
    }

    #[test]
    fn test_frame_order() {
        let frame = ReplayFrame {
            released: Some(vec![PhysicalKey::A]),
            motion: Some(MouseMotion { x: 1, y: 1 }),
            buttons: vec![MouseButtonInput {
                x: 1,
                y: 1,
                button: PhysicalMouseButton::Middle,
                just_pressed: false,
            }],
            wheel: Some(MouseWheel { x: 1, y: 1, dy: 1.0 }),
            resize: Some(WindowSize {
                width: 80,
                height: 24,
            }),
            ..Default::default()
        };

        let mut replayer = replayer();
        replayer.play_frame(&frame);

        let messages = replayer.translator().sink().messages();
        match messages.as_slice() {
            [UiMessage::Key(_), UiMessage::MouseMotion(_), UiMessage::MouseButton(_), UiMessage::MouseWheel(wheel), UiMessage::WindowSize(_)] =>
            {
                assert_eq!(wheel.direction, WheelDirection::Up);
            }
            other => panic!("Unexpected message order: {:?}", other),
        }
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("script.toml");
        let mut file = std::fs::File::create(&toml_path).unwrap();
        writeln!(file, "[[frames]]\nreleased = [\"Escape\"]").unwrap();
        assert_eq!(ReplayScript::load(&toml_path).unwrap().len(), 1);

        let json_path = dir.path().join("script.json");
        std::fs::write(&json_path, r#"{"frames": [{}, {}]}"#).unwrap();
        assert_eq!(ReplayScript::load(&json_path).unwrap().len(), 2);

        let other_path = dir.path().join("script.yaml");
        std::fs::write(&other_path, "frames: []").unwrap();
        let err = ReplayScript::load(&other_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported replay script extension"));
    }
}
