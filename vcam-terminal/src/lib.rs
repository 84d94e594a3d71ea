/// Terminal shell for the wireframe viewer
///
/// Event-driven crossterm front-end: blocks on input events, maps them
/// onto the camera controller, and redraws after every accepted event.
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use vcam_core::{CameraController, CameraInput, Config, Projector, Scene};

pub mod renderer;

pub use renderer::WireframeRenderer;

const STATUS_CONTROLS: &str =
    "WASD=Move QE=Up/Down Arrows=Rotate ZX=Roll CV=Zoom Esc=Quit";

/// Main application struct for the terminal viewer.
pub struct ViewerApp {
    controller: CameraController,
    projector: Projector,
    window_width: u32,
    window_height: u32,
    renderer: WireframeRenderer,
    running: bool,
}

impl ViewerApp {
    pub fn new(scene: Scene, config: &Config) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        log::info!(
            "terminal {}x{} cells, virtual canvas {}x{}",
            width,
            height,
            config.window_width,
            config.window_height
        );

        Ok(Self {
            controller: CameraController::new(scene, config),
            projector: Projector::default(),
            window_width: config.window_width,
            window_height: config.window_height,
            renderer: WireframeRenderer::new(
                width as usize,
                height as usize,
                config.window_width,
                config.window_height,
            ),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while self.running {
            let event = event::read()?;
            if self.handle_event(event) {
                self.render()?;
            }
        }

        Ok(())
    }

    /// Dispatch one terminal event. Returns true when a repaint is due.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Esc => {
                    self.running = false;
                    false
                }
                other => match map_key(other) {
                    Some(input) => self.controller.handle(input),
                    None => false,
                },
            },
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match map_mouse(kind, column, row) {
                Some(input) => self.controller.handle(input),
                None => false,
            },
            Event::Resize(width, height) => {
                self.renderer = WireframeRenderer::new(
                    width as usize,
                    height as usize,
                    self.window_width,
                    self.window_height,
                );
                true
            }
            _ => false,
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let projected = self
            .projector
            .project(self.controller.scene(), self.controller.distance());

        self.renderer.clear();
        self.renderer.render_polygons(&projected);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "VCam | distance: {:.0} | {}",
                self.controller.distance(),
                STATUS_CONTROLS
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Map a key press to a camera input.
fn map_key(code: KeyCode) -> Option<CameraInput> {
    match code {
        KeyCode::Char('w') => Some(CameraInput::MoveForward),
        KeyCode::Char('s') => Some(CameraInput::MoveBackward),
        KeyCode::Char('a') => Some(CameraInput::MoveLeft),
        KeyCode::Char('d') => Some(CameraInput::MoveRight),
        KeyCode::Char('q') => Some(CameraInput::MoveUp),
        KeyCode::Char('e') => Some(CameraInput::MoveDown),
        KeyCode::Up => Some(CameraInput::RotateUp),
        KeyCode::Down => Some(CameraInput::RotateDown),
        KeyCode::Left => Some(CameraInput::RotateLeft),
        KeyCode::Right => Some(CameraInput::RotateRight),
        KeyCode::Char('z') => Some(CameraInput::RollLeft),
        KeyCode::Char('x') => Some(CameraInput::RollRight),
        KeyCode::Char('c') => Some(CameraInput::ZoomIn),
        KeyCode::Char('v') => Some(CameraInput::ZoomOut),
        _ => None,
    }
}

/// Map a mouse event to a camera input.
fn map_mouse(kind: MouseEventKind, column: u16, row: u16) -> Option<CameraInput> {
    match kind {
        MouseEventKind::Down(_) => Some(CameraInput::PointerPressed),
        MouseEventKind::Drag(_) => Some(CameraInput::PointerMoved {
            x: column as f64,
            y: row as f64,
        }),
        MouseEventKind::ScrollUp => Some(CameraInput::Wheel { delta: 1.0 }),
        MouseEventKind::ScrollDown => Some(CameraInput::Wheel { delta: -1.0 }),
        _ => None,
    }
}
