use super::error_messages::{
    Error,
    Result,
};

#[macro_export]
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        let cond = $cond;
        if $crate::LOCATION_LOG && !cond {
            $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!())
        }
        $crate::errors::error_handler::try_or(cond, $err)
    }};
}

#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        if $crate::LOCATION_LOG {
            $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!());
        }
        $crate::errors::error_handler::err($err)
    }};
}

#[macro_export]
macro_rules! panic_if_not {
    ($cond:expr) => {{
        let cond = $cond;
        if $crate::LOCATION_LOG && !cond {
            $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!())
        }
        $crate::errors::error_handler::panic_if_not(cond)
    }};
}

pub fn try_or(cond: bool, err: Error) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(err)
    }
}

pub fn err<T>(err: Error) -> Result<T> {
    Err(err)
}

pub fn panic_if_not(cond: bool) {
    assert!(cond)
}
