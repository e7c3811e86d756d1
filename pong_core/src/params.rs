/// Tuning parameters for the simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 200.0; // units per second
    pub const PADDLE_EDGE_OFFSET: f32 = 1.5; // rest offset from each edge, in half-widths

    // Ball
    pub const BALL_DIAMETER: f32 = 15.0;
    pub const BALL_SPEED: f32 = 200.0; // base speed, units per second
    pub const DIFFICULTY_MULTIPLIER: f32 = 3.0; // speed gain per rally hit
    pub const DEFLECT_PUSH: f32 = 10.0; // horizontal push clear of the paddle on deflection

    // Deflection authority, in multiples of the frame's relative speed
    pub const SHIFT_RANGE_FACTOR: f32 = 10.0;
    pub const MAX_SHIFT_FACTOR: f32 = 5.0;

    // Serve vertical speed, units per frame; upper bound exclusive
    pub const SERVE_Y_VEL_MIN: i32 = -5;
    pub const SERVE_Y_VEL_MAX: i32 = 5;

    // Score
    pub const WIN_SCORE: u8 = 11;
}
