#![allow(clippy::redundant_pub_crate)]

/// C-style for loop, usable in const contexts.
macro_rules! cfor {
    ($init: stmt; $cond: expr; $step: expr; $body: block) => {{
        $init
        while $cond {
            $body;

            $step;
        }
    }};
}

pub(crate) use cfor;
