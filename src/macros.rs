#[macro_export]
macro_rules! unroll_for {
    ($b:ident in $byte: expr, $x: block) => {
        let mut $b = ($byte >> 7) & 1 != 0;
        $x;
        $b = ($byte >> 6) & 1 != 0;
        $x;
        $b = ($byte >> 5) & 1 != 0;
        $x;
        $b = ($byte >> 4) & 1 != 0;
        $x;
        $b = ($byte >> 3) & 1 != 0;
        $x;
        $b = ($byte >> 2) & 1 != 0;
        $x;
        $b = ($byte >> 1) & 1 != 0;
        $x;
        $b = $byte & 1 != 0;
        $x;
    };
}

#[macro_export]
macro_rules! usize {
    ($a:expr) => {
        if cfg!(feature = "unsafe_conversions") {
            unsafe { usize::try_from($a).unwrap_unchecked() }
        } else {
            usize::try_from($a).unwrap()
        }
    };
}
