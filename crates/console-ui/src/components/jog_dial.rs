//! Jog Dial Component.
//!
//! Rotary drag-to-tune widget. While the pointer is held down over
//! the dial, each pointer move reports the current rotation angle;
//! the backend maps angle changes to frequency changes.

use leptos::*;

/// Rotation angle in degrees of the pointer about the dial centre.
///
/// 0 points straight up, clockwise is positive, range (-180, 180].
fn pointer_angle(centre_x: f64, centre_y: f64, x: f64, y: f64) -> f64 {
    (x - centre_x).atan2(centre_y - y).to_degrees()
}

/// Jog dial component reporting a continuous rotation value.
#[component]
pub fn JogDial(
    /// Callback with the dial rotation in degrees on each move
    on_rotate: Callback<f64>,
) -> impl IntoView {
    let dial_ref = create_node_ref::<leptos::html::Div>();
    let engaged = create_rw_signal(false);
    let rotation = create_rw_signal(0.0f64);

    let handle_move = move |ev: web_sys::PointerEvent| {
        if !engaged.get() {
            return;
        }
        // Dragging the dial must not drag-select or scroll the page.
        ev.prevent_default();
        let Some(dial) = dial_ref.get() else {
            return;
        };
        let rect = dial.get_bounding_client_rect();
        let angle = pointer_angle(
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        );
        rotation.set(angle);
        on_rotate.call(angle);
    };

    view! {
        <div
            id="dial"
            class="jog-dial"
            class:engaged=move || engaged.get()
            node_ref=dial_ref
            on:pointerdown=move |ev| {
                ev.prevent_default();
                engaged.set(true);
            }
            on:pointerup=move |_| engaged.set(false)
            on:pointerleave=move |_| engaged.set(false)
            on:pointermove=handle_move
        >
            <div
                class="jog-dial-knob"
                style:transform=move || format!("rotate({:.1}deg)", rotation.get())
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} degrees, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_angle_is_zero_straight_up() {
        assert_close(pointer_angle(100.0, 100.0, 100.0, 40.0), 0.0);
    }

    #[test]
    fn test_angle_increases_clockwise() {
        assert_close(pointer_angle(100.0, 100.0, 160.0, 100.0), 90.0);
        assert_close(pointer_angle(100.0, 100.0, 100.0, 160.0), 180.0);
        assert_close(pointer_angle(100.0, 100.0, 40.0, 100.0), -90.0);
    }

    #[test]
    fn test_angle_diagonals() {
        assert_close(pointer_angle(0.0, 0.0, 1.0, -1.0), 45.0);
        assert_close(pointer_angle(0.0, 0.0, -1.0, 1.0), -135.0);
    }
}
