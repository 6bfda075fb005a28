//! A fully laid-out tooltip, ready to render or to receive taps.

use signpost_core::{
    content::ContentItem,
    geometry::{Bounds, Point},
    placement::PlacementResult,
};

use crate::{backdrop::Backdrop, layout::ContentLayout, tooltip::TopAction};

/// What a tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    /// The dimmed area, or a highlight hole.
    Background,
    /// The dialog or its arrow, away from any button.
    Dialog,
    CloseButton,
    TopAction,
    /// An action button, by item index and position within the row.
    Action { item: usize, action: usize },
}

/// Output of [`TooltipBuilder::layout`](crate::TooltipBuilder::layout).
#[derive(Debug, Clone)]
pub struct Presentation {
    screen: Bounds,
    placement: PlacementResult,
    content: ContentLayout,
    backdrop: Backdrop,
    items: Vec<ContentItem>,
    top_action: Option<(TopAction, Bounds)>,
    line_height: f32,
}

impl Presentation {
    pub(crate) fn new(
        screen: Bounds,
        placement: PlacementResult,
        content: ContentLayout,
        backdrop: Backdrop,
        items: Vec<ContentItem>,
        top_action: Option<(TopAction, Bounds)>,
        line_height: f32,
    ) -> Self {
        Self {
            screen,
            placement,
            content,
            backdrop,
            items,
            top_action,
            line_height,
        }
    }

    pub fn screen(&self) -> Bounds {
        self.screen
    }

    pub fn placement(&self) -> &PlacementResult {
        &self.placement
    }

    /// Dialog frame in screen coordinates.
    pub fn dialog_bounds(&self) -> Bounds {
        self.placement.dialog_bounds()
    }

    /// Rows laid out relative to the dialog origin.
    pub fn content(&self) -> &ContentLayout {
        &self.content
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// The top action with its screen frame.
    pub fn top_action(&self) -> Option<(&TopAction, Bounds)> {
        self.top_action
            .as_ref()
            .map(|(action, frame)| (action, *frame))
    }

    /// Line height used for labels.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns true if the dialog extends past the far screen edges.
    pub fn overflows(&self) -> bool {
        self.placement.overflows(self.screen)
    }

    /// Resolves a tap at a screen `point`.
    ///
    /// The top action is checked first since it sits above the backdrop,
    /// then the dialog's buttons, then the dialog body.
    pub fn hit_test(&self, point: Point) -> TapTarget {
        if self
            .top_action()
            .is_some_and(|(_, frame)| frame.contains_point(point))
        {
            return TapTarget::TopAction;
        }

        let dialog = self.dialog_bounds();
        if dialog.contains_point(point) {
            let local = point.sub_point(dialog.min_point());
            if self
                .content
                .close_button()
                .is_some_and(|button| button.contains_point(local))
            {
                return TapTarget::CloseButton;
            }
            if let Some((item, action)) = self.content.action_at(local) {
                return TapTarget::Action { item, action };
            }
            return TapTarget::Dialog;
        }

        if arrow_contains(&self.placement, point) {
            return TapTarget::Dialog;
        }

        TapTarget::Background
    }
}

/// Returns true if `point` lies inside the arrow triangle.
fn arrow_contains(placement: &PlacementResult, point: Point) -> bool {
    let [a, b, c] = placement.arrow().points();
    let cross = |p: Point, q: Point| {
        (q.x() - p.x()) * (point.y() - p.y()) - (q.y() - p.y()) * (point.x() - p.x())
    };
    let d1 = cross(a, b);
    let d2 = cross(b, c);
    let d3 = cross(c, a);
    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}
