/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 400;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 50;
    pub const PADDLE_PADDING: i32 = 5; // gap between paddle and field edge
    pub const PADDLE_SPEED: i32 = 5; // units per frame

    // Ball
    pub const BALL_DIAMETER: i32 = 10;
    pub const BALL_SPEED: i32 = 5; // max |component| of the initial velocity

    // Entity contracts
    pub const MAX_SPEED: i32 = 5;
    pub const MAX_SIZE: i32 = 1000;

    // Timing
    pub const FRAME_MS: u64 = 50;
    pub const MAX_CATCH_UP_FRAMES: u32 = 5; // frames run per update after a stall
}
