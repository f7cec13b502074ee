//! Referral feed with its two tabs and the "new referral" form.

use crate::components::{Footer, Header, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::data::models::format_thousands;
use crate::data::{Indication, SEGMENTS};
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::referrals::{relative_time, FeedTab, ReferralDraft, ReferralFeed, ReferralFormError};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{
    center_fixed, create_standard_layout, typed_char, InputFilter, ListStateExt, TextInput,
};
use crate::widgets::{TextInputWidget, TextInputWidgetExt, ToastVariant};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Description,
    Segment,
    Value,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Segment,
        FormField::Value,
    ];

    fn step(self, delta: isize) -> FormField {
        let len = Self::ORDER.len() as isize;
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(index + delta).rem_euclid(len) as usize]
    }

    fn for_error(error: &ReferralFormError) -> FormField {
        match error {
            ReferralFormError::MissingTitle => FormField::Title,
            ReferralFormError::MissingDescription => FormField::Description,
            ReferralFormError::MissingSegment => FormField::Segment,
            ReferralFormError::InvalidValue => FormField::Value,
        }
    }
}

/// The "new referral" form
struct ReferralForm {
    title: TextInput,
    description: TextInput,
    /// Index into [`SEGMENTS`], `None` until one is picked
    segment: Option<usize>,
    value: TextInput,
    focus: FormField,
    error: Option<ReferralFormError>,
}

impl ReferralForm {
    fn new() -> Self {
        Self {
            title: TextInput::new().max_len(80),
            description: TextInput::new().max_len(280),
            segment: None,
            value: TextInput::new().filter(InputFilter::Digits).max_len(12),
            focus: FormField::Title,
            error: None,
        }
    }

    fn draft(&self) -> ReferralDraft {
        ReferralDraft {
            title: self.title.text().to_string(),
            description: self.description.text().to_string(),
            segment: self
                .segment
                .and_then(|i| SEGMENTS.get(i))
                .map(|s| s.to_string())
                .unwrap_or_default(),
            value: self.value.text().to_string(),
        }
    }

    fn cycle_segment(&mut self, delta: isize) {
        let len = SEGMENTS.len() as isize;
        self.segment = Some(match self.segment {
            None if delta < 0 => SEGMENTS.len() - 1,
            None => 0,
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
        });
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Value => Some(&mut self.value),
            FormField::Segment => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let popup = center_fixed(area, 64, 18);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(Span::styled(" New referral ", t.title_style()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [title, description, segment, value, error] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        let invalid = |field: FormField| {
            self.error
                .as_ref()
                .is_some_and(|e| FormField::for_error(e) == field)
        };

        frame.render_text_input_widget(
            TextInputWidget::new(&self.title)
                .title("Title")
                .placeholder("What do you need?")
                .focused(self.focus == FormField::Title)
                .invalid(invalid(FormField::Title)),
            title,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.description)
                .title("Description")
                .placeholder("Details of the opportunity")
                .focused(self.focus == FormField::Description)
                .invalid(invalid(FormField::Description)),
            description,
        );

        let segment_focused = self.focus == FormField::Segment;
        let segment_label = match self.segment.and_then(|i| SEGMENTS.get(i)) {
            Some(name) => Span::styled(format!("◂ {} ▸", name), t.text_style()),
            None => Span::styled("◂ Choose a segment ▸", t.placeholder_style()),
        };
        frame.render_widget(
            Paragraph::new(Line::from(segment_label)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(if invalid(FormField::Segment) {
                        t.error_style()
                    } else if segment_focused {
                        t.border_focused_style()
                    } else {
                        t.border_style()
                    })
                    .title(" Segment "),
            ),
            segment,
        );

        let value_display = match self.value.text().parse::<u64>() {
            Ok(v) => format!("R$ {}", format_thousands(v)),
            Err(_) => self.value.text().to_string(),
        };
        frame.render_text_input_widget(
            TextInputWidget::new(&self.value)
                .title("Reward (optional)")
                .placeholder("R$ 0")
                .display(value_display)
                .focused(self.focus == FormField::Value)
                .invalid(invalid(FormField::Value)),
            value,
        );

        if let Some(err) = &self.error {
            frame.render_widget(
                Paragraph::new(err.to_string())
                    .style(t.error_style())
                    .alignment(Alignment::Center),
                error,
            );
        }
    }
}

pub struct IndicationsScreen {
    feed: ReferralFeed,
    tab: FeedTab,
    list_state: ListState,
    form: Option<ReferralForm>,
}

impl IndicationsScreen {
    pub fn new(feed: ReferralFeed) -> Self {
        let mut screen = Self {
            feed,
            tab: FeedTab::Feed,
            list_state: ListState::default(),
            form: None,
        };
        screen.list_state.clamp_to(screen.visible_len());
        screen
    }

    pub fn feed(&self) -> &ReferralFeed {
        &self.feed
    }

    pub fn tab(&self) -> FeedTab {
        self.tab
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    fn visible_len(&self) -> usize {
        self.feed.visible(self.tab).len()
    }

    fn switch_tab(&mut self, tab: FeedTab) {
        self.tab = tab;
        self.list_state.select(None);
        self.list_state.clamp_to(self.visible_len());
    }

    fn submit_form(&mut self) -> ScreenAction {
        let Some(form) = self.form.as_mut() else {
            return ScreenAction::None;
        };
        match self.feed.publish(&form.draft()) {
            Ok(_) => {
                self.form = None;
                self.switch_tab(FeedTab::Feed);
                ScreenAction::notify("Referral published", ToastVariant::Success)
            }
            Err(e) => {
                form.focus = FormField::for_error(&e);
                form.error = Some(e);
                ScreenAction::None
            }
        }
    }

    fn handle_form_key(&mut self, key: &KeyEvent, action: Option<Action>) -> ScreenAction {
        let Some(form) = self.form.as_mut() else {
            return ScreenAction::None;
        };

        if typed_char(key.code, key.modifiers).is_some() {
            if let Some(input) = form.focused_input() {
                input.handle_key(key.code, key.modifiers, action);
                form.error = None;
                return ScreenAction::None;
            }
        }

        match action {
            Some(Action::Cancel) => {
                self.form = None;
            }
            Some(Action::Save) => return self.submit_form(),
            Some(Action::Confirm) if form.focus == FormField::Value => return self.submit_form(),
            Some(Action::NextField | Action::MoveDown | Action::Confirm) => {
                form.focus = form.focus.step(1);
            }
            Some(Action::PrevField | Action::MoveUp) => {
                form.focus = form.focus.step(-1);
            }
            Some(Action::MoveLeft) if form.focus == FormField::Segment => {
                form.cycle_segment(-1);
                form.error = None;
            }
            Some(Action::MoveRight) if form.focus == FormField::Segment => {
                form.cycle_segment(1);
                form.error = None;
            }
            _ => {
                if let Some(input) = form.focused_input() {
                    if input.handle_key(key.code, key.modifiers, action) {
                        form.error = None;
                    }
                }
            }
        }
        ScreenAction::None
    }

    fn list_item(item: &Indication, now: &DateTime<Local>) -> ListItem<'static> {
        let t = theme();
        let mut meta = vec![
            Span::styled(item.author.clone(), t.emphasis_style()),
            Span::styled(
                format!("  ·  {}  ·  {}", item.segment, relative_time(&item.timestamp, now)),
                t.muted_style(),
            ),
        ];
        if let Some(value) = item.value {
            meta.push(Span::styled(
                format!("  ·  R$ {}", format_thousands(value)),
                t.success_style(),
            ));
        }
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(item.title.clone(), t.title_style()),
                Span::raw("  "),
                Span::styled(format!("[{}]", item.status.label()), t.status_style(item.status)),
            ]),
            Line::styled(item.description.clone(), t.text_style()),
            Line::from(meta),
            Line::styled(format!("{} responses", item.responses), t.muted_style()),
            Line::default(),
        ])
    }
}

impl Screen for IndicationsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [header, content, footer] = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);
        Header::render(frame, header, ScreenId::Indications.title(), self.tab.title());

        let [tabs_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(content);
        let selected_tab = match self.tab {
            FeedTab::Feed => 0,
            FeedTab::Mine => 1,
        };
        frame.render_widget(
            Tabs::new(vec![FeedTab::Feed.title(), FeedTab::Mine.title()])
                .select(selected_tab)
                .style(t.muted_style())
                .highlight_style(t.title_style().add_modifier(Modifier::UNDERLINED))
                .divider(" │ "),
            tabs_area,
        );

        let items = self.feed.visible(self.tab);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        if items.is_empty() {
            let message = match self.tab {
                FeedTab::Feed => "No referrals yet",
                FeedTab::Mine => "You have not posted any referral yet",
            };
            frame.render_widget(
                Paragraph::new(message)
                    .style(t.muted_style())
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
        } else {
            let list_items: Vec<ListItem> = items
                .iter()
                .map(|item| Self::list_item(item, &ctx.now))
                .collect();
            frame.render_stateful_widget(
                List::new(list_items)
                    .block(block)
                    .highlight_symbol(LIST_HIGHLIGHT_SYMBOL),
                list_area,
                &mut self.list_state,
            );
        }

        if let Some(form) = &self.form {
            form.render(frame, content);
        }

        let keymap = &ctx.config.keymap;
        let hint = if self.form.is_some() {
            format!(
                "{}: Next field | {}: Publish | {}: Cancel",
                keymap.get_key_display_for_action(Action::NextField),
                keymap.get_key_display_for_action(Action::Save),
                keymap.get_key_display_for_action(Action::Cancel),
            )
        } else {
            format!(
                "{}: New referral | {}/{}: Tab | {}: Back",
                keymap.get_key_display_for_action(Action::Create),
                keymap.get_key_display_for_action(Action::MoveLeft),
                keymap.get_key_display_for_action(Action::MoveRight),
                keymap.get_key_display_for_action(Action::Cancel),
            )
        };
        Footer::render(frame, footer, &hint);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action(key);

        if self.form.is_some() {
            return Ok(self.handle_form_key(key, action));
        }

        Ok(match action {
            Some(Action::Create) => {
                self.form = Some(ReferralForm::new());
                ScreenAction::None
            }
            Some(Action::MoveLeft | Action::MoveRight | Action::NextField | Action::PrevField) => {
                self.switch_tab(self.tab.toggle());
                ScreenAction::None
            }
            Some(Action::Cancel) => ScreenAction::Navigate(NavEvent::Back),
            Some(action) => {
                self.list_state.apply_action(action, self.visible_len());
                ScreenAction::None
            }
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.form.is_some()
    }
}
