#[cfg(test)]
mod tests {
    use crate::size::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_bits_is_exact() {
        for bits in [0, 1, 7, 8, 9, 1023, -3, i64::MAX] {
            let size = ByteSize::from_bits(bits);
            assert_eq!(size.bits(), bits);
            assert_eq!(size.bytes(), bits as f64 / 8.0);
        }
    }

    #[test]
    fn test_from_bytes_rounds_bits_up() {
        for bytes in [0.0, 1.0, 0.1, 0.125, 1.3, 1024.5, -0.1, -2.7] {
            let size = ByteSize::from_bytes(bytes);
            assert_eq!(size.bits(), (bytes * 8.0).ceil() as i64, "bytes: {}", bytes);
            assert_eq!(size.bytes(), bytes);
        }
    }

    #[test]
    fn test_unit_views_round_trip() {
        let x = 1.5;
        assert_eq!(ByteSize::from_kilo_bytes(x).kilo_bytes(), x);
        assert_eq!(ByteSize::from_mega_bytes(x).mega_bytes(), x);
        assert_eq!(ByteSize::from_giga_bytes(x).giga_bytes(), x);
        assert_eq!(ByteSize::from_tera_bytes(x).tera_bytes(), x);
        assert_eq!(ByteSize::from_peta_bytes(x).peta_bytes(), x);
        assert_eq!(ByteSize::from_kibi_bytes(x).kibi_bytes(), x);
        assert_eq!(ByteSize::from_mebi_bytes(x).mebi_bytes(), x);
        assert_eq!(ByteSize::from_gibi_bytes(x).gibi_bytes(), x);
        assert_eq!(ByteSize::from_tebi_bytes(x).tebi_bytes(), x);
        assert_eq!(ByteSize::from_pebi_bytes(x).pebi_bytes(), x);
    }

    #[test]
    fn test_doubling_in_every_unit() {
        let x = 3.7;
        for system in [UnitSystem::Decimal, UnitSystem::Binary] {
            for unit in system.prefixed_units() {
                let size = ByteSize::from_unit(*unit, x);
                let doubled = size.add(size).in_unit(*unit);
                assert!((doubled - 2.0 * x).abs() < 1e-9, "unit: {}", unit);
            }
        }
    }

    #[test]
    fn test_from_prefixed() {
        assert_eq!(
            ByteSize::from_prefixed(UnitSystem::Binary, Prefix::Mega, 2.0),
            ByteSize::from_mebi_bytes(2.0)
        );
        assert_eq!(
            ByteSize::from_prefixed(UnitSystem::Decimal, Prefix::Tera, 2.0),
            ByteSize::from_tera_bytes(2.0)
        );
    }

    #[test]
    fn test_constructors_scale_by_unit() {
        assert_eq!(ByteSize::from_kilo_bytes(1.0).bytes(), 1_000.0);
        assert_eq!(ByteSize::from_kibi_bytes(1.0).bytes(), 1_024.0);
        assert_eq!(ByteSize::from_giga_bytes(1.0).bits(), 8_000_000_000);
        assert_eq!(ByteSize::from_gibi_bytes(1.0).bits(), 8_589_934_592);
        assert_eq!(ByteSize::from_unit(Unit::Bit, 16.0).bytes(), 2.0);
    }

    #[test]
    fn test_add_and_subtract() {
        let size = ByteSize::from_bytes(1.0).add(ByteSize::from_bytes(1.0));
        assert_eq!(size.bits(), 16);
        assert_eq!(size.bytes(), 2.0);

        let size = ByteSize::from_bytes(4.0).subtract(ByteSize::from_bytes(2.0));
        assert_eq!(size, ByteSize::from_bytes(2.0));

        assert_eq!(ByteSize::from_bytes(4.0) - ByteSize::from_bytes(2.0), ByteSize::from_bytes(2.0));
        assert_eq!(ByteSize::from_bytes(1.0) + ByteSize::from_bytes(1.0), ByteSize::from_bits(16));
    }

    #[test]
    fn test_add_named_units() {
        let size = ByteSize::from_bytes(1.0);
        assert_eq!(size.add_bits(8).bytes(), 2.0);
        assert_eq!(size.add_bytes(1.0).bytes(), 2.0);
        assert_eq!(size.add_kilo_bytes(2.0).bytes(), 2_001.0);
        assert_eq!(size.add_mega_bytes(2.0).bytes(), 2_000_001.0);
        assert_eq!(size.add_kibi_bytes(2.0).bytes(), 2_049.0);
        assert_eq!(size.add_mebi_bytes(2.0).bytes(), 2_097_153.0);
        assert_eq!(size.add_pebi_bytes(1.0).pebi_bytes(), 1.0 + 1.0 / BYTES_IN_PEBI_BYTE as f64);
    }

    #[test]
    fn test_assign_operators() {
        let mut size = ByteSize::from_bytes(2.0);
        size += ByteSize::from_bytes(3.0);
        assert_eq!(size.bytes(), 5.0);
        size -= ByteSize::from_bytes(1.0);
        assert_eq!(size.bytes(), 4.0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let size = ByteSize::from_bytes(2.0);
        assert_eq!(size.increment().bits(), 24);
        assert_eq!(size.decrement().bits(), 8);
        assert_eq!(size.decrement().bytes(), 1.0);
    }

    #[test]
    fn test_negate() {
        let size = -ByteSize::from_bytes(2.0);
        assert_eq!(size.bits(), -16);
        assert_eq!(size.bytes(), -2.0);
        assert_eq!(ByteSize::from_bits(1).negate().bits(), -1);
    }

    #[test]
    fn test_multiply_and_divide() {
        let product = ByteSize::from_bytes(2.0) * ByteSize::from_bytes(2.0);
        assert_eq!(product.bytes(), 4.0);
        assert_eq!((ByteSize::from_bytes(3.0) * 2.5).bytes(), 7.5);

        let quotient = ByteSize::from_bytes(4.0).divide(ByteSize::from_bytes(2.0));
        assert_eq!(quotient, Ok(ByteSize::from_bytes(2.0)));
    }

    #[test]
    fn test_divide_by_zero() {
        let result = ByteSize::from_bytes(1.0).divide(ByteSize::from_bytes(0.0));
        assert_eq!(result, Err(ByteSizeError::DivideByZero));

        let result = ByteSize::from_bytes(1.0).divide(ByteSize::ZERO);
        assert_eq!(result, Err(ByteSizeError::DivideByZero));
    }

    #[test]
    fn test_equality_and_ordering_use_bits() {
        // 0.1 and 0.125 bytes both round up to one bit
        assert_eq!(ByteSize::from_bytes(0.1), ByteSize::from_bytes(0.125));
        assert!(ByteSize::from_bits(1) < ByteSize::from_bits(2));
        assert!(ByteSize::from_kilo_bytes(1.0) < ByteSize::from_kibi_bytes(1.0));
        assert!(ByteSize::MIN < ByteSize::ZERO && ByteSize::ZERO < ByteSize::MAX);

        let mut sizes = vec![ByteSize::from_mega_bytes(1.0), ByteSize::from_bits(3), ByteSize::ZERO];
        sizes.sort();
        assert_eq!(sizes, vec![ByteSize::ZERO, ByteSize::from_bits(3), ByteSize::from_mega_bytes(1.0)]);
    }

    #[test]
    fn test_hash_uses_bits() {
        let set: HashSet<ByteSize> = [ByteSize::from_bytes(0.1), ByteSize::from_bytes(0.125)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_min_and_max() {
        assert_eq!(ByteSize::MAX.bits(), i64::MAX);
        assert_eq!(ByteSize::MIN.bits(), i64::MIN);
        assert_eq!(ByteSize::from_bits(i64::MAX), ByteSize::MAX);
    }

    #[test]
    fn test_sum() {
        let sizes = [ByteSize::from_bytes(2.0), ByteSize::from_bytes(3.0)];
        assert_eq!(ByteSize::sum(sizes), Some(ByteSize::from_bytes(5.0)));
        assert_eq!(sizes.iter().sum::<ByteSize>(), ByteSize::from_bytes(5.0));
        assert_eq!(ByteSize::sum(Vec::new()), None);
        assert_eq!(Vec::<ByteSize>::new().into_iter().sum::<ByteSize>(), ByteSize::ZERO);
    }

    #[test]
    fn test_largest_whole_number() {
        let size = ByteSize::from_kibi_bytes(1.5);
        assert_eq!(size.largest_whole_number_unit(UnitSystem::Binary), Unit::KibiByte);
        assert_eq!(size.largest_whole_number_value(UnitSystem::Binary), 1.5);
        assert_eq!(size.largest_whole_number_unit(UnitSystem::Decimal), Unit::KiloByte);
        assert_eq!(size.largest_whole_number_symbol(UnitSystem::Decimal), "KB");

        let tiny = ByteSize::from_bits(4);
        assert_eq!(tiny.largest_whole_number_unit(UnitSystem::Decimal), Unit::Bit);
        assert_eq!(tiny.largest_whole_number_value(UnitSystem::Decimal), 4.0);

        let negative = ByteSize::from_giga_bytes(-3.0);
        assert_eq!(negative.largest_whole_number_unit(UnitSystem::Decimal), Unit::GigaByte);
        assert_eq!(negative.largest_whole_number_value(UnitSystem::Decimal), -3.0);
    }
}
