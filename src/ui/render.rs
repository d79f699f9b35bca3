use crate::ui::app::App;
use crate::ui::compose::render_compose_form;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    render_compose_form(
        frame,
        body,
        app.compose_state(),
        app.focus(),
        app.reply_scroll(),
    );
    frame.render_widget(Footer::new().widget(footer, app.notice()), footer);
}
