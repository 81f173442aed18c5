// Engine modules: physics, input, camera, game loop

pub mod camera;
pub mod game_loop;
pub mod input;
pub mod physics;
