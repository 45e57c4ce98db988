//! The algorithmic Hangul syllable mappings.
//!
//! Precomposed syllables in `[U+AC00, U+D7A4)` decompose into two or three
//! conjoining jamo by pure arithmetic; no table is involved. The inverse
//! folds L+V and LV+T pairs back into syllables.

pub const S_BASE: u32 = 0xAC00;
pub const L_BASE: u32 = 0x1100;
pub const V_BASE: u32 = 0x1161;
pub const T_BASE: u32 = 0x11A7;
pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// True for a precomposed syllable in `[S_BASE, S_BASE + S_COUNT)`.
#[must_use]
pub const fn is_precomposed_syllable(scalar: u32) -> bool {
    S_BASE <= scalar && scalar < S_BASE + S_COUNT
}

/// True when the sequence starts with a decomposed syllable pair: L then V,
/// or an LV syllable then T.
#[must_use]
pub fn is_decomposed_syllable(scalars: &[u32]) -> bool {
    let (Some(&first), Some(&second)) = (scalars.first(), scalars.get(1)) else {
        return false;
    };
    if (L_BASE..L_BASE + L_COUNT).contains(&first) && (V_BASE..V_BASE + V_COUNT).contains(&second)
    {
        return true;
    }
    is_precomposed_syllable(first)
        && (first - S_BASE) % T_COUNT == 0
        && T_BASE < second
        && second < T_BASE + T_COUNT
}

/// Emit the jamo decomposition of a precomposed syllable: (L, V) or
/// (L, V, T).
pub fn decompose_syllable(scalar: u32, out: &mut Vec<u32>) {
    let s_index = scalar - S_BASE;
    out.push(L_BASE + s_index / N_COUNT);
    out.push(V_BASE + (s_index % N_COUNT) / T_COUNT);
    let t = T_BASE + s_index % T_COUNT;
    if t != T_BASE {
        out.push(t);
    }
}

/// Fold a leading decomposed syllable back into precomposed form, pushing
/// the result onto `out`. Returns how many input scalars were consumed.
pub fn compose_syllables(scalars: &[u32], out: &mut Vec<u32>) -> usize {
    let mut last = scalars[0];
    out.push(last);

    let mut i = 1;
    while i < scalars.len() {
        let scalar = scalars[i];

        let l_index = last.wrapping_sub(L_BASE);
        if l_index < L_COUNT {
            let v_index = scalar.wrapping_sub(V_BASE);
            if v_index < V_COUNT {
                last = S_BASE + (l_index * V_COUNT + v_index) * T_COUNT;
                if let Some(slot) = out.last_mut() {
                    *slot = last;
                }
                i += 1;
                continue;
            }
        }

        let s_index = last.wrapping_sub(S_BASE);
        if s_index < S_COUNT && s_index % T_COUNT == 0 {
            let t_index = scalar.wrapping_sub(T_BASE);
            if t_index > 0 && t_index < T_COUNT {
                last += t_index;
                if let Some(slot) = out.last_mut() {
                    *slot = last;
                }
                i += 1;
                continue;
            }
        }

        break;
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_lv() {
        let mut out = Vec::new();
        decompose_syllable(0xAC00, &mut out);
        assert_eq!(out, [0x1100, 0x1161]);
    }

    #[test]
    fn decompose_lvt() {
        let mut out = Vec::new();
        decompose_syllable(0xAC01, &mut out);
        assert_eq!(out, [0x1100, 0x1161, 0x11A8]);
    }

    #[test]
    fn compose_lvt() {
        let mut out = Vec::new();
        let used = compose_syllables(&[0x1100, 0x1161, 0x11A8], &mut out);
        assert_eq!(used, 3);
        assert_eq!(out, [0xAC01]);
    }

    #[test]
    fn compose_lv_then_t() {
        let mut out = Vec::new();
        let used = compose_syllables(&[0xAC00, 0x11A8], &mut out);
        assert_eq!(used, 2);
        assert_eq!(out, [0xAC01]);
    }

    #[test]
    fn every_syllable_round_trips() {
        let mut decomposed = Vec::new();
        let mut recomposed = Vec::new();
        for scalar in S_BASE..S_BASE + S_COUNT {
            decomposed.clear();
            recomposed.clear();
            decompose_syllable(scalar, &mut decomposed);
            assert!(matches!(decomposed.len(), 2 | 3));
            let used = compose_syllables(&decomposed, &mut recomposed);
            assert_eq!(used, decomposed.len());
            assert_eq!(recomposed, [scalar]);
        }
    }

    #[test]
    fn syllable_predicates() {
        assert!(is_precomposed_syllable(0xAC00));
        assert!(is_precomposed_syllable(0xD7A3));
        assert!(!is_precomposed_syllable(0xD7A4));
        assert!(is_decomposed_syllable(&[0x1100, 0x1161]));
        assert!(is_decomposed_syllable(&[0xAC00, 0x11A8]));
        assert!(!is_decomposed_syllable(&[0xAC01, 0x11A8]));
        assert!(!is_decomposed_syllable(&[0x1100]));
    }
}
