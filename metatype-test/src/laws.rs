#[cfg(test)]
mod tests {
    use std::ops;

    use metatype::prelude::*;
    use pretty_assertions::assert_eq;

    /*
     * Every list below is fixed at compile time. Each law is checked over a
     * table of concrete cases computed by the trait solver, against native
     * runtime arithmetic where there is a native counterpart.
     */

    fn sizes<L: Concat<R>, R: TList>(l: Types<L>, m: Types<R>) -> (usize, usize, usize) {
        ((l + m).size().get(), l.size().get(), m.size().get())
    }

    #[test]
    fn test_concat_size_adds() {
        let table = [
            sizes(types![], types![]),
            sizes(types![u8], types![]),
            sizes(types![], types![u8, u8]),
            sizes(types![u8, String], types![char]),
            sizes(types![bool, bool, bool], types![i8, u16, i32, u64]),
        ];
        for (lm, l, m) in table {
            assert_eq!(lm, l + m);
        }
    }

    #[test]
    fn test_concat_keeps_positions() {
        let l = types![u8, String];
        let m = types![char, bool, u8];
        let lm = l + m;
        let table = [
            same!(lm.at(index::<0>()), l.at(index::<0>())).get(),
            same!(lm.at(index::<1>()), l.at(l.size().dec())).get(),
            same!(lm.at(l.size()), m.at(index::<0>())).get(),
            same!(lm.at(index::<2>()), m.at(index::<2>() - l.size())).get(),
            same!(lm.at(index::<3>()), m.at(index::<3>() - l.size())).get(),
            same!(lm.at(index::<4>()), m.at(index::<4>() - l.size())).get(),
            same!(lm.at(lm.size().dec()), m.at(m.size().dec())).get(),
            same!(lm.at(l.size() + m.size().dec()), m.at(lm.size().dec() - l.size())).get(),
        ];
        for (case, held) in table.into_iter().enumerate() {
            assert!(held, "case {}", case);
        }
    }

    #[test]
    fn test_find_inverts_at() {
        let l = types![u8, String, char, (), [u16; 2]];
        let table = [
            (0, l.find(l.at(index::<0>())).get()),
            (1, l.find(l.at(index::<1>())).get()),
            (2, l.find(l.at(index::<2>())).get()),
            (3, l.find(l.at(index::<3>())).get()),
            (4, l.find(l.at(l.size().dec())).get()),
        ];
        for (position, found) in table {
            assert_eq!(position, found);
        }
    }

    #[test]
    fn test_value_find_is_first_occurrence() {
        let v = ints![3, 1, 3, 1, 4];
        let table = [
            (0, v.find(I32::<3>).get()),
            (1, v.find(I32::<1>).get()),
            (4, v.find(I32::<4>).get()),
            (1, v.find(I32::<2> - I32::<1>).get()),
            (0, v.find(v.at(index::<2>())).get()),
        ];
        for (position, found) in table {
            assert_eq!(position, found);
        }
    }

    #[test]
    fn test_equality_is_exact() {
        let l = types![u8, u16];
        let table = [
            (same!(l, l).get(), true),
            (same!(l, types![u8, u16]).get(), true),
            (same!(l, types![u8]).get(), false),
            (same!(l, types![u8, u16, u16]).get(), false),
            (same!(l, types![u16, u8]).get(), false),
            (same!(l, types![u8, i16]).get(), false),
            (same!(types![], types![]).get(), true),
        ];
        for (got, expected) in table {
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_equality_is_symmetric() {
        let (l, m, n) = (types![u8], types![u8, char], types![char, u8]);
        let table = [
            (same!(l, m).get(), same!(m, l).get()),
            (same!(m, n).get(), same!(n, m).get()),
            (same!(n, n).get(), same!(n, n).get()),
            (ints![1].equal(ints![1, 2]).get(), ints![1, 2].equal(ints![1]).get()),
            (ints![1, 2].equal(ints![2, 1]).get(), ints![2, 1].equal(ints![1, 2]).get()),
        ];
        for (lm, ml) in table {
            assert_eq!(lm, ml);
        }
    }


    struct Row<T> {
        a: T,
        b: T,
        add: T,
        sub: T,
        mul: T,
        div: T,
        rem: T,
        and: T,
        or: T,
        xor: T,
        less: bool,
        equal: bool,
        greater_equal: bool,
    }

    impl<T> Row<T>
        where T: Copy + PartialOrd
            + ops::Add<Output = T> + ops::Sub<Output = T> + ops::Mul<Output = T>
            + ops::Div<Output = T> + ops::Rem<Output = T>
            + ops::BitAnd<Output = T> + ops::BitOr<Output = T> + ops::BitXor<Output = T>
    {
        fn agrees(&self) -> bool {
            let (a, b) = (self.a, self.b);
            self.add == a + b
                && self.sub == a - b
                && self.mul == a * b
                && self.div == a / b
                && self.rem == a % b
                && self.and == (a & b)
                && self.or == (a | b)
                && self.xor == (a ^ b)
                && self.less == (a < b)
                && self.equal == (a == b)
                && self.greater_equal == (a >= b)
        }
    }

    macro_rules! rows {
        ($t:ident; $(($a:literal, $b:literal)),* $(,)?) => {
            [$( {
                let (a, b) = (value!($t, $a), value!($t, $b));
                Row {
                    a: a.get(),
                    b: b.get(),
                    add: (a + b).get(),
                    sub: (a - b).get(),
                    mul: (a * b).get(),
                    div: (a / b).get(),
                    rem: (a % b).get(),
                    and: (a & b).get(),
                    or: (a | b).get(),
                    xor: (a ^ b).get(),
                    less: a.less(b).get(),
                    equal: a.equal(b).get(),
                    greater_equal: a.greater_equal(b).get(),
                }
            } ),*]
        };
    }

    #[test]
    fn test_signed_ops_agree_with_native() {
        let rows = rows!(i64;
            (7, 3), (-7, 3), (9, -4), (0, 5), (100, -1), (-1_000_000, 7), (5, 5)
        );
        for row in &rows {
            assert!(row.agrees(), "{} and {}", row.a, row.b);
        }
    }

    #[test]
    fn test_unsigned_ops_agree_with_native() {
        let rows = rows!(u8;
            (7, 3), (127, 2), (40, 6), (15, 15), (12, 10), (1, 1)
        );
        for row in &rows {
            assert!(row.agrees(), "{} and {}", row.a, row.b);
        }
    }

    #[test]
    fn test_unary_ops_agree_with_native() {
        let table = [
            ((-value!(i16, 300)).get(), -300i16),
            ((!value!(i16, 0)).get(), !0i16),
            (value!(i16, -9).inc().get(), -8),
            (value!(i16, -9).dec().get(), -10),
        ];
        for (lifted, native) in table {
            assert_eq!(lifted, native);
        }
    }

    macro_rules! logic {
        ($a:literal, $b:literal) => {{
            let (x, y) = (value!(bool, $a), value!(bool, $b));
            ([$a, $b], [
                x.and(y).get(),
                x.or(y).get(),
                (!x).get(),
                (x ^ y).get(),
                x.equal(y).get(),
                x.less(y).get(),
            ])
        }};
    }

    #[test]
    fn test_logic_agrees_with_native() {
        let table = [logic!(false, false), logic!(false, true), logic!(true, false), logic!(true, true)];
        for ([a, b], lifted) in table {
            assert_eq!(lifted, [a && b, a || b, !a, a ^ b, a == b, !a & b]);
        }
    }
}
