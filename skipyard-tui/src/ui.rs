use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap},
};
use skipyard_core::{
    model::{Dimension, EnrichedSkip},
    pricing::{total_price, vat_amount},
    scaling::{DEFAULT_BASE_HEIGHT, DEFAULT_BASE_WIDTH, scaled_height, scaled_width},
    tier::{SizeTier, size_guide},
};

use crate::app::{App, Screen};

/// Cells used by the widest profile bar.
const PROFILE_CELLS: f64 = 24.0;
const HEIGHT_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new(format!(
        "skipyard – skip hire in {} · {} compared",
        app.location,
        app.comparison.len()
    ))
    .block(Block::default().borders(Borders::ALL).title("Skipyard"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::SkipList => draw_skip_list(frame, app, *content_area),
        Screen::Detail => draw_detail(frame, app, *content_area),
        Screen::Compare => draw_comparison(frame, app, *content_area),
        Screen::AddToCompare => draw_add_dialog(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::SkipList => {
            "↑/↓ move · Enter details · c compare · a pick several · v comparison · r reload · q quit"
        }
        Screen::Detail => "c compare · Esc/←/b back · q quit",
        Screen::Compare => "↑/↓ move · d remove · x clear · a add skips · Esc/←/b back · q quit",
        Screen::AddToCompare => "↑/↓ move · Space tick · Enter add ticked · Esc back · q quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else if let Some(msg) = &app.info_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else if app.info_message.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_skip_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [list_area, guide_area] = chunks else {
        return;
    };

    if app.skips.is_empty() {
        let text = if app.is_loading {
            "Loading skips…"
        } else {
            "No skips available for this location. Press r to reload."
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Skips"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *list_area);
    } else {
        let rows = app.skips.iter().map(|skip| {
            let compared = if app.comparison.contains(skip.id()) {
                "●"
            } else {
                ""
            };
            let mut style = Style::default();
            if skip.raw.forbidden {
                style = style.add_modifier(Modifier::DIM);
            }

            Row::new(vec![
                size_cell(skip),
                Cell::from(skip.category.map_or("", |category| category.as_str())),
                Cell::from(money(skip.raw.price_before_vat)),
                Cell::from(format!("{} days", skip.raw.hire_period_days)),
                Cell::from(flag(skip.raw.allowed_on_road, "road", "private only")),
                Cell::from(flag(skip.raw.allows_heavy_waste, "heavy", "light only")),
                Cell::from(suitability_label(skip)),
                Cell::from(compared),
            ])
            .style(style)
        });

        let column_widths = [
            Constraint::Length(8),
            Constraint::Length(17),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Min(20),
            Constraint::Length(3),
        ];

        let table = Table::new(rows, column_widths)
            .header(
                Row::new(vec![
                    "Size", "Type", "Price", "Hire", "Placement", "Waste", "Suitable for", "Cmp",
                ])
                .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Skips (prices before VAT)"),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .column_spacing(1);

        let mut state = TableState::default();
        state.select(Some(app.list_index));
        frame.render_stateful_widget(table, *list_area, &mut state);
    }

    let guide_lines: Vec<Line<'_>> = size_guide()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(tier_color(entry.tier))),
                Span::styled(entry.range, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(": {}", entry.uses)),
            ])
        })
        .collect();
    let guide = Paragraph::new(guide_lines)
        .block(Block::default().borders(Borders::ALL).title("Size guide"));
    frame.render_widget(guide, *guide_area);
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(skip) = app.current_skip() else {
        let paragraph = Paragraph::new("No skip selected.")
            .block(Block::default().borders(Borders::ALL).title("Details"));
        frame.render_widget(paragraph, area);
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dims = &skip.dimensions;

    let mut lines = vec![
        Line::from(Span::styled(format!("{} Yard Skip", skip.size()), bold)),
        Line::from(&*skip.description),
        Line::default(),
        Line::from(format!(
            "{} · {} day hire",
            money(skip.raw.price_before_vat),
            skip.raw.hire_period_days
        )),
        Line::from(format!(
            "VAT ({}%): {}",
            skip.raw.vat,
            money(vat_amount(&skip.raw))
        )),
        Line::from(Span::styled(
            format!("Total: {}", money(total_price(&skip.raw))),
            bold,
        )),
        Line::default(),
        Line::from(format!("Bin bags: {}", skip.bin_bag_capacity)),
        Line::from(format!("Capacity: {}", measurement(&dims.size))),
        Line::from(format!("Length:   {}", measurement(&dims.length))),
        Line::from(format!("Width:    {}", measurement(&dims.width))),
        Line::from(format!("Height:   {}", measurement(&dims.height))),
        Line::default(),
        Line::from(if skip.raw.allowed_on_road {
            "Can be placed on road with permit"
        } else {
            "Private property only"
        }),
        Line::from(format!("Suitable for: {}", suitability_label(skip))),
    ];

    if let Some(category) = skip.category {
        lines.push(Line::from(format!("Type: {category}")));
    }
    if let Some(transport) = skip.raw.transport_cost {
        let per_tonne = skip
            .raw
            .per_tonne_cost
            .map_or_else(|| "N/A".to_owned(), money);
        lines.push(Line::from(format!(
            "Transport cost: {} · Per tonne cost: {per_tonne}",
            money(transport)
        )));
    }
    if let Some(updated) = skip.raw.last_updated() {
        lines.push(Line::from(format!(
            "Listing updated {}",
            updated.format("%d.%m.%Y %H:%M")
        )));
    }
    if skip.raw.forbidden {
        lines.push(Line::from(Span::styled(
            "Not available for booking",
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Details for {} (Esc/←/b to go back)", skip.raw.postcode)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_comparison(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = "Comparison (profiles to scale against all skips)";

    if app.comparison.is_empty() {
        let paragraph = Paragraph::new(
            "Nothing to compare yet. Press c on a skip in the list, or a to pick several.",
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = app.comparison.skips().iter().map(|skip| {
        Row::new(vec![
            size_cell(skip),
            Cell::from(money(skip.raw.price_before_vat)),
            Cell::from(money(total_price(&skip.raw))),
            Cell::from(&*skip.bin_bag_capacity),
            Cell::from(&*skip.dimensions.length.metric),
            Cell::from(&*skip.dimensions.height.metric),
            Cell::from(flag(skip.raw.allowed_on_road, "yes", "no")),
            Cell::from(flag(skip.raw.allows_heavy_waste, "yes", "no")),
            Cell::from(profile(skip, &app.skips))
                .style(Style::default().fg(tier_color(SizeTier::for_size(skip.size())))),
        ])
    });

    let column_widths = [
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Min(26),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec![
                "Size", "Price", "Total", "Bags", "Length", "Height", "Road", "Heavy", "Profile",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.compare_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_add_dialog(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = app
        .skips
        .iter()
        .map(|skip| {
            let marker = if app.comparison.contains(skip.id()) {
                "[=]"
            } else if app.selection.contains(skip.id()) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(format!(
                "{marker} {} yard · {}",
                skip.size(),
                money(skip.raw.price_before_vat)
            ))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Add skips to comparison (Space tick, Enter add)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.skips.is_empty() {
        state.select(Some(app.dialog_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn size_cell(skip: &EnrichedSkip) -> Cell<'static> {
    Cell::from(format!("{} yd", skip.size())).style(
        Style::default()
            .fg(tier_color(SizeTier::for_size(skip.size())))
            .add_modifier(Modifier::BOLD),
    )
}

fn tier_color(tier: SizeTier) -> Color {
    match tier {
        SizeTier::Light => Color::Rgb(253, 186, 116),
        SizeTier::Regular => Color::Rgb(249, 115, 22),
        SizeTier::Dark => Color::Rgb(194, 65, 12),
    }
}

fn money(amount: f64) -> String {
    format!("£{amount}")
}

fn flag(value: bool, yes: &'static str, no: &'static str) -> &'static str {
    if value { yes } else { no }
}

fn measurement(dimension: &Dimension) -> String {
    format!("{} ({})", dimension.imperial, dimension.metric)
}

fn suitability_label(skip: &EnrichedSkip) -> String {
    skip.suitable
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bar whose length follows the scaled width, capped by a glyph for the scaled height.
fn profile(skip: &EnrichedSkip, all: &[EnrichedSkip]) -> String {
    let width = scaled_width(skip, all, DEFAULT_BASE_WIDTH) / DEFAULT_BASE_WIDTH;
    let height = scaled_height(skip, all, DEFAULT_BASE_HEIGHT) / DEFAULT_BASE_HEIGHT;

    let cells = fraction_to_steps(width, PROFILE_CELLS);
    let glyph_index = fraction_to_steps(height, 7.0);
    let glyph = HEIGHT_GLYPHS
        .get(glyph_index)
        .copied()
        .unwrap_or('█');

    std::iter::repeat_n(glyph, cells.max(1)).collect()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=steps before the cast"
)]
fn fraction_to_steps(fraction: f64, steps: f64) -> usize {
    (fraction * steps).round().clamp(0.0, steps) as usize
}
