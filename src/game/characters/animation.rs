// Character animation: per-state frame lists, mirroring and cadence cycling

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use image::{imageops, Rgba, RgbaImage};

use super::character::Facing;
use super::state::CharacterState;
use crate::game::config::ConfigError;

/// A single displayable frame
#[derive(Clone, PartialEq)]
pub struct SpriteFrame {
    /// Identifier the renderer uses to pick the texture
    pub name: String,
    /// Whether this is the horizontally flipped copy
    pub mirrored: bool,
    pub image: Arc<RgbaImage>,
}

impl SpriteFrame {
    pub fn new(name: &str, image: RgbaImage) -> Self {
        Self {
            name: name.to_string(),
            mirrored: false,
            image: Arc::new(image),
        }
    }

    /// The horizontally flipped copy of this frame
    pub fn mirrored(&self) -> Self {
        Self {
            name: self.name.clone(),
            mirrored: !self.mirrored,
            image: Arc::new(imageops::flip_horizontal(self.image.as_ref())),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl fmt::Debug for SpriteFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpriteFrame")
            .field("name", &self.name)
            .field("mirrored", &self.mirrored)
            .field("size", &self.size())
            .finish()
    }
}

/// Which frame set a character wears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterStyle {
    #[default]
    Big,
    #[allow(dead_code)]
    Small,
}

impl CharacterStyle {
    /// Bounding box size (width, height) in pixels
    pub fn size(&self) -> (i32, i32) {
        match self {
            Self::Big => (24, 32),
            Self::Small => (24, 16),
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Small => "small",
        }
    }
}

/// Unvalidated frame lists keyed by state, as handed over by the asset layer
#[derive(Debug, Clone, Default)]
pub struct FrameTable {
    frames: HashMap<CharacterState, Vec<SpriteFrame>>,
}

impl FrameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frames for a state
    pub fn with_frames(mut self, state: CharacterState, frames: Vec<SpriteFrame>) -> Self {
        self.frames.insert(state, frames);
        self
    }

    /// Flat-coloured stand-in frames for a style: one frame per state,
    /// three for running
    ///
    /// Each image has a darker leading column so mirrored copies differ.
    pub fn placeholder(style: CharacterStyle) -> Self {
        let (width, height) = style.size();
        let mut table = Self::new();
        for state in CharacterState::ALL {
            let count = if state == CharacterState::Running { 3 } else { 1 };
            let frames = (0..count)
                .map(|i| {
                    let name = format!("{}_{}_{}", style.prefix(), state.name(), i);
                    let shade = 80 + 40 * i as u8;
                    let image = RgbaImage::from_fn(width as u32, height as u32, |x, _| {
                        if x == 0 {
                            Rgba([20, 20, 20, 255])
                        } else {
                            Rgba([shade, 40, 40, 255])
                        }
                    });
                    SpriteFrame::new(&name, image)
                })
                .collect();
            table = table.with_frames(state, frames);
        }
        table
    }
}

/// Validated frames for every state (each list has at least one frame)
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    by_state: [Vec<SpriteFrame>; 4],
}

impl FrameSet {
    /// Check that every state has frames; fails on the first that has none
    pub fn from_table(mut table: FrameTable) -> Result<Self, ConfigError> {
        let mut by_state: [Vec<SpriteFrame>; 4] = Default::default();
        for state in CharacterState::ALL {
            let frames = table.frames.remove(&state).unwrap_or_default();
            if frames.is_empty() {
                return Err(ConfigError::EmptyFrames(state));
            }
            by_state[state.index()] = frames;
        }
        Ok(Self { by_state })
    }

    pub fn frames(&self, state: CharacterState) -> &[SpriteFrame] {
        &self.by_state[state.index()]
    }

    /// Every frame flipped horizontally
    pub fn mirrored(&self) -> Self {
        let mut by_state: [Vec<SpriteFrame>; 4] = Default::default();
        for (dst, src) in by_state.iter_mut().zip(self.by_state.iter()) {
            *dst = src.iter().map(SpriteFrame::mirrored).collect();
        }
        Self { by_state }
    }
}

/// Right-facing frames plus their mirrored copy, built on first use
///
/// Turning around hands out the cached set; frames are never re-flipped.
#[derive(Debug)]
pub struct SpriteFrames {
    right: Arc<FrameSet>,
    left: OnceCell<Arc<FrameSet>>,
}

impl SpriteFrames {
    pub fn new(right: FrameSet) -> Self {
        Self {
            right: Arc::new(right),
            left: OnceCell::new(),
        }
    }

    pub fn frames_for(&self, facing: Facing) -> &Arc<FrameSet> {
        match facing {
            Facing::Right => &self.right,
            Facing::Left => self.left.get_or_init(|| {
                log::debug!("Mirroring character frames");
                Arc::new(self.right.mirrored())
            }),
        }
    }
}

/// Picks which frame of the active state to show
///
/// The cursor moves one frame every `cadence` ticks and wraps after the last
/// frame. A state change puts the cursor back on the first frame immediately.
/// Single-frame states never advance and do not count ticks.
#[derive(Debug)]
pub struct AnimationCycler {
    frames: SpriteFrames,
    cadence: u32,
    state: CharacterState,
    cursor: usize,
    elapsed: u32,
}

impl AnimationCycler {
    pub fn new(frames: FrameSet, cadence: u32) -> Result<Self, ConfigError> {
        if cadence == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        Ok(Self {
            frames: SpriteFrames::new(frames),
            cadence,
            state: CharacterState::default(),
            cursor: 0,
            elapsed: 0,
        })
    }

    /// Advance one tick showing `state`; returns the frame index to display
    pub fn advance(&mut self, state: CharacterState) -> usize {
        if state != self.state {
            self.state = state;
            self.cursor = 0;
            self.elapsed = 0;
        }

        let len = self.frames.right.frames(state).len();
        if len <= 1 {
            return self.cursor;
        }

        if self.elapsed > 0 && self.elapsed % self.cadence == 0 {
            self.cursor = (self.cursor + 1) % len;
        }
        self.elapsed += 1;
        self.cursor
    }

    /// Frame set for a facing direction (cached per direction)
    pub fn frames_for(&self, facing: Facing) -> &Arc<FrameSet> {
        self.frames.frames_for(facing)
    }

    /// The frame currently on display for `facing`
    pub fn current_frame(&self, facing: Facing) -> &SpriteFrame {
        &self.frames_for(facing).frames(self.state)[self.cursor]
    }
}
