//! Per-phase screens

use glam::Vec2;

use crate::palette;
use crate::platform::Canvas;
use crate::sim::{Game, GamePhase};

pub const TITLE: &str = "Colored Orb Catcher";

/// Draw the screen for the game's current phase
pub fn draw(game: &Game, canvas: &mut impl Canvas) {
    match game.phase {
        GamePhase::Menu => draw_menu(game, canvas),
        GamePhase::Playing => draw_playing(game, canvas),
        GamePhase::GameOver => draw_game_over(game, canvas),
    }
}

/// Font size, letter spacing and color of a line of text
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: f32,
    spacing: f32,
    color: [f32; 4],
}

impl TextStyle {
    const fn new(size: f32, spacing: f32, color: [f32; 4]) -> Self {
        Self {
            size,
            spacing,
            color,
        }
    }
}

/// Draw `text` horizontally centered at height `y`
fn centered_text(canvas: &mut impl Canvas, game: &Game, text: &str, y: f32, style: TextStyle) {
    let font = game.font();
    let extent = canvas.measure_text(font, text, style.size, style.spacing);
    let pos = Vec2::new((game.screen_size().x - extent.x) / 2.0, y);
    canvas.draw_text(font, text, pos, style.size, style.spacing, style.color);
}

fn draw_menu(game: &Game, canvas: &mut impl Canvas) {
    let screen = game.screen_size();

    canvas.clear_background(palette::DARK_BLUE);
    centered_text(
        canvas,
        game,
        TITLE,
        screen.y / 3.0,
        TextStyle::new(40.0, 2.0, palette::YELLOW),
    );
    centered_text(
        canvas,
        game,
        "Press [ENTER] to Start",
        screen.y / 2.0 + 20.0,
        TextStyle::new(20.0, 1.0, palette::WHITE),
    );
    centered_text(
        canvas,
        game,
        "Arrows <- -> to Move | [SPACE] to Change Color",
        screen.y * 0.7,
        TextStyle::new(18.0, 1.0, palette::LIGHT_GRAY),
    );
}

fn draw_playing(game: &Game, canvas: &mut impl Canvas) {
    let font = game.font();
    let screen = game.screen_size();
    let target = game.player.target;

    canvas.clear_background(palette::BACKGROUND);

    canvas.fill_rect(game.player.pos, game.player.size, target.visual());
    for orb in game.orbs.iter().filter(|o| o.active) {
        canvas.fill_circle(orb.pos, orb.radius(), orb.visual());
    }

    // HUD
    let score = format!("Score: {}", game.score);
    canvas.draw_text(font, &score, Vec2::new(10.0, 10.0), 24.0, 2.0, palette::WHITE);

    let label = format!("Catch: {}", target.label());
    let extent = canvas.measure_text(font, &label, 20.0, 1.0);
    canvas.draw_text(
        font,
        &label,
        Vec2::new(screen.x - extent.x - 10.0, 10.0),
        20.0,
        1.0,
        target.visual(),
    );
}

fn draw_game_over(game: &Game, canvas: &mut impl Canvas) {
    let screen = game.screen_size();

    canvas.clear_background(palette::BLACK);
    centered_text(
        canvas,
        game,
        "GAME OVER",
        screen.y / 3.0,
        TextStyle::new(50.0, 2.0, palette::RED),
    );

    let final_score = format!("Final Score: {}", game.score);
    centered_text(
        canvas,
        game,
        &final_score,
        screen.y / 2.0,
        TextStyle::new(30.0, 1.0, palette::WHITE),
    );

    let tally = format!(
        "Caught {} | Wrong {} | Dropped {}",
        game.stats.caught, game.stats.wrong, game.stats.dropped
    );
    centered_text(
        canvas,
        game,
        &tally,
        screen.y / 2.0 + 45.0,
        TextStyle::new(18.0, 1.0, palette::LIGHT_GRAY),
    );

    centered_text(
        canvas,
        game,
        "Press [ENTER] to return to the Menu",
        screen.y * 0.7,
        TextStyle::new(20.0, 1.0, palette::LIGHT_GRAY),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedStep, Font};
    use crate::renderer::DrawList;
    use crate::settings::Settings;
    use crate::sim::{FrameInput, OrbColor};

    fn started_game() -> (Game, DrawList) {
        let mut list = DrawList::new();
        let mut game = Game::new(Settings::default(), 8);
        game.start(&mut list);
        (game, list)
    }

    #[test]
    fn test_menu_screen() {
        let (game, mut list) = started_game();
        game.draw(&mut list);
        assert_eq!(list.clear_color(), palette::DARK_BLUE);
        assert!(list.vertices().is_empty());
        let title = &list.texts()[0];
        assert_eq!(title.text, TITLE);
        // Centered
        let width = list.measure_text(Font::default(), TITLE, 40.0, 2.0).x;
        assert!((title.pos.x * 2.0 + width - 800.0).abs() < 1e-3);
    }

    #[test]
    fn test_playing_screen() {
        let (mut game, mut list) = started_game();
        let confirm = FrameInput {
            confirm: true,
            ..Default::default()
        };
        game.input(&confirm, &FixedStep::SIXTY_HZ);
        game.player.target = OrbColor::Green;
        game.spawn_orb_at(Vec2::new(100.0, 100.0), OrbColor::Blue);
        game.spawn_orb_at(Vec2::new(200.0, 100.0), OrbColor::Red);
        game.orbs[1].active = false;
        game.score = 30;

        game.draw(&mut list);
        // Paddle plus one visible orb
        let orb_verts = 3 * crate::renderer::shapes::circle_segments(15.0) as usize;
        assert_eq!(list.vertices().len(), 6 + orb_verts);
        assert_eq!(list.vertices()[0].color, OrbColor::Green.visual());

        let texts: Vec<&str> = list.texts().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Score: 30", "Catch: GREEN"]);
        let label = &list.texts()[1];
        assert_eq!(label.color, OrbColor::Green.visual());
        let width = list.measure_text(Font::default(), "Catch: GREEN", 20.0, 1.0).x;
        assert!((label.pos.x + width + 10.0 - 800.0).abs() < 1e-3);
    }

    #[test]
    fn test_text_stays_on_screen() {
        fn check(game: &Game, list: &mut DrawList) {
            list.begin_frame();
            game.draw(list);
            for run in list.texts() {
                let extent = list.measure_text(Font::default(), &run.text, run.size, run.spacing);
                assert!(run.pos.x >= 0.0, "{} starts off screen", run.text);
                assert!(run.pos.x + extent.x <= 800.0, "{} is clipped", run.text);
            }
        }

        let (mut game, mut list) = started_game();

        check(&game, &mut list);
        game.phase = GamePhase::Playing;
        for color in OrbColor::ALL {
            game.player.target = color;
            game.score = -19;
            check(&game, &mut list);
        }
        game.phase = GamePhase::GameOver;
        game.stats.caught = 1000;
        check(&game, &mut list);
    }

    #[test]
    fn test_game_over_screen() {
        let (mut game, mut list) = started_game();
        game.phase = GamePhase::GameOver;
        game.score = -25;
        game.draw(&mut list);
        assert_eq!(list.clear_color(), palette::BLACK);
        assert!(list.texts().iter().any(|t| t.text == "Final Score: -25"));
    }
}
