use raylib::prelude::*;
use std::path::PathBuf;

pub trait Engine: Sized {
    fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> anyhow::Result<Self>;
    fn update(&mut self, dt: f32, rl: &mut RaylibHandle);
    fn draw(&self, d: &mut RaylibDrawHandle);
}
