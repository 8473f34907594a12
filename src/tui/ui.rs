use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Notice, ProductDetail, ProductList, RegistrationForm, StatisticsView, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Pull-based render: everything on screen is derived from `app` and `tui`
/// as they are right now.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let screen = app.screen();

    TitleBar::new(screen.title(), app.navigator.depth(), app.store.len())
        .render(frame, title_area);

    draw_screen(frame, main_area, app, tui);

    frame.render_widget(
        Span::styled(help_text(screen), Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(text) = &app.notice {
        Notice::new(text).render(frame, main_area);
    }
}

fn draw_screen(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    match app.screen() {
        Screen::Registration => RegistrationForm::new(&tui.form).render(frame, area),
        Screen::Listing => ProductList::new(&mut tui.list, &app.store).render(frame, area),
        Screen::Detail(_) => {
            ProductDetail::new(app.detail_product(), &app.currency_symbol).render(frame, area)
        }
        Screen::Statistics => {
            StatisticsView::new(&app.store, &app.currency_symbol).render(frame, area)
        }
    }
}

fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Registration => {
            " Tab/↑↓ Field  Enter Register  Ctrl+T Statistics  Esc Quit "
        }
        Screen::Listing => " ↑↓ Select  Enter Details  Esc/b Back  Ctrl+T Statistics ",
        Screen::Detail(_) | Screen::Statistics => " Esc Back  Ctrl+C Quit ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_lines, test_app, widget};

    fn draw(app: &App, tui: &mut TuiState) -> String {
        render_lines(80, 20, |f| draw_ui(f, app, tui)).join("\n")
    }

    #[test]
    fn test_draw_registration() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Stockroom | Register Product"));
        assert!(text.contains("Product name"));
        assert!(text.contains("Enter Register"));
    }

    #[test]
    fn test_draw_listing() {
        let mut app = test_app();
        app.store.add(widget());
        app.navigator.navigate(Screen::Listing);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Products (depth 2)"));
        assert!(text.contains("Widget (3 units)"));
    }

    #[test]
    fn test_draw_detail_with_stale_name() {
        let mut app = test_app();
        app.navigator.navigate(Screen::Detail("Ghost".to_string()));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Product Details"));
        assert!(text.contains("Product not found."));
    }

    #[test]
    fn test_draw_statistics() {
        let mut app = test_app();
        app.store.add(widget());
        app.navigator.navigate(Screen::Statistics);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Total stock value: $ 29.97"));
        assert!(text.contains("Total units in stock: 3"));
    }

    #[test]
    fn test_draw_notice() {
        let mut app = test_app();
        app.notice = Some("All fields are required (name is empty)".to_string());
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("All fields are required (name is empty)"));
    }
}
