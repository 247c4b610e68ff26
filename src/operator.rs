///
/// The operators that can appear in SVG path data
///
/// Each operator has an absolute (upper-case) and a relative (lower-case) symbol
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathOperator {
    MoveTo,                     // m (x, y)
    ClosePath,                  // z
    LineTo,                     // l (x, y)
    HorizontalLineTo,           // h (x)
    VerticalLineTo,             // v (y)
    CurveTo,                    // c (x1, y1, x2, y2, x, y)
    SmoothCurveTo,              // s (x2, y2, x, y)
    QuadraticCurveTo,           // q (x1, y1, x, y)
    SmoothQuadraticCurveTo,     // t (x, y)
    Arc,                        // a (rx, ry, rotation, large_arc, sweep, x, y)
}

impl PathOperator {
    ///
    /// Finds the operator for a symbol, ignoring its case
    ///
    pub fn from_symbol(symbol: char) -> Option<PathOperator> {
        use self::PathOperator::*;

        match symbol.to_ascii_lowercase() {
            'm' => Some(MoveTo),
            'z' => Some(ClosePath),
            'l' => Some(LineTo),
            'h' => Some(HorizontalLineTo),
            'v' => Some(VerticalLineTo),
            'c' => Some(CurveTo),
            's' => Some(SmoothCurveTo),
            'q' => Some(QuadraticCurveTo),
            't' => Some(SmoothQuadraticCurveTo),
            'a' => Some(Arc),
            _   => None
        }
    }

    ///
    /// The number of parameters a single instance of this operator takes
    ///
    pub fn arity(&self) -> usize {
        use self::PathOperator::*;

        match self {
            MoveTo                  => 2,
            ClosePath               => 0,
            LineTo                  => 2,
            HorizontalLineTo        => 1,
            VerticalLineTo          => 1,
            CurveTo                 => 6,
            SmoothCurveTo           => 4,
            QuadraticCurveTo        => 4,
            SmoothQuadraticCurveTo  => 2,
            Arc                     => 7
        }
    }

    ///
    /// The symbol for this operator, upper-case for the absolute form and lower-case for the relative form
    ///
    pub fn symbol(&self, absolute: bool) -> char {
        use self::PathOperator::*;

        let relative = match self {
            MoveTo                  => 'm',
            ClosePath               => 'z',
            LineTo                  => 'l',
            HorizontalLineTo        => 'h',
            VerticalLineTo          => 'v',
            CurveTo                 => 'c',
            SmoothCurveTo           => 's',
            QuadraticCurveTo        => 'q',
            SmoothQuadraticCurveTo  => 't',
            Arc                     => 'a'
        };

        if absolute { relative.to_ascii_uppercase() } else { relative }
    }
}
