// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! EXTI edge input.
//!
//! Routes a GPIO input to its EXTI line, triggering on both edges. The ISR calls
//! [`EdgeInput::take_edge`] to acknowledge the line and learn which edge fired.

use stm32f7xx_hal::{
    gpio::{self, Edge, ExtiPin, Floating, Input},
    pac::{EXTI, SYSCFG},
    rcc::APB2,
};

/// Edge that raised the interrupt, judged from the pin level after it fired.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    Rising,
    Falling,
}

pub struct EdgeInput<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Input<Floating>>,
}

impl<const P: char, const N: u8> EdgeInput<P, N> {
    /// Connect `pin` to EXTI line `N` and unmask it for rising and falling edges.
    ///
    /// The matching NVIC line still has to be unmasked by the caller.
    pub fn listen(
        mut pin: gpio::Pin<P, N, Input<Floating>>,
        syscfg: &mut SYSCFG,
        apb2: &mut APB2,
        exti: &mut EXTI,
    ) -> Self {
        pin.make_interrupt_source(syscfg, apb2);
        pin.trigger_on_edge(exti, Edge::RisingFalling);
        pin.enable_interrupt(exti);
        Self { pin }
    }

    /// Clear the pending flag and report the edge, or `None` if this line did not fire.
    ///
    /// Level is sampled after clearing, so a pulse shorter than ISR latency can be
    /// misclassified; at motor speeds that is not a concern.
    pub fn take_edge(&mut self) -> Option<Transition> {
        if !self.pin.check_interrupt() {
            return None;
        }
        self.pin.clear_interrupt_pending_bit();
        Some(if self.pin.is_high() {
            Transition::Rising
        } else {
            Transition::Falling
        })
    }
}
