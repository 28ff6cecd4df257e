/// Terminal presentation layer for the sw3d pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use log::debug;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use sw3d_core::{EngineConfig, FrameDriver, RenderMode, Scene};

pub mod renderer;

pub use renderer::AsciiCanvas;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    driver: FrameDriver,
    canvas: AsciiCanvas,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Build a frame driver sized to the current terminal window.
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let config = EngineConfig {
            width: width as u32,
            height: height as u32,
            ..Default::default()
        };
        let driver = FrameDriver::new(scene, config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            driver,
            canvas: AsciiCanvas::new(width as usize, height as usize),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Restore the terminal on every exit path, including errors.
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.driver.is_running() {
            let frame_start = Instant::now();

            // The quit signal is honored between frames, never mid-frame.
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.canvas.clear();
            self.driver
                .tick(&mut self.canvas)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            self.present()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        debug!("main loop finished at angle {:.3}", self.driver.angle());
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.driver.stop(),
                KeyCode::Char('p') => self.driver.set_render_mode(RenderMode::Points),
                KeyCode::Char('w') => self.driver.set_render_mode(RenderMode::Wireframe),
                KeyCode::Char('f') => self.driver.set_render_mode(RenderMode::Filled),
                _ => {}
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.present(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "sw3d | FPS: {:.1} | Controls: P=Points W=Wireframe F=Filled Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
