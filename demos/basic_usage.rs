//! Basic usage example for dynbuf
//!
//! Run with: cargo run --example basic_usage

use dynbuf::*;

fn main() -> Result<(), Error> {
    println!("dynbuf Basic Usage Example");
    println!("==========================");

    // Example 1: Simple record
    println!("\n1. Simple Record:");
    {
        let mut buf = DynamicBuffer::new();

        buf.put_u32(12345, None); // sequence number
        buf.put_u64(1_700_000_000_000_000_000, None); // timestamp (ns since epoch)
        buf.put_f64(50_000.25, None); // price
        buf.put_u16(100, None); // quantity
        buf.put_bool(true, None); // active flag
        buf.put_str("AAPL", None); // symbol

        println!("  Encoded {} bytes", buf.len());

        buf.rewind();
        let seq = buf.get_u32(None);
        let ts_ns = buf.get_u64(None);
        let price = buf.get_f64(None);
        let qty = buf.get_u16(None);
        let active = buf.get_bool(None);
        let symbol = buf.get_string(None);

        println!(
            "  Decoded: seq={}, ts={}, price={}, qty={}, active={}, symbol={:?}",
            seq, ts_ns, price, qty, active, symbol
        );
    }

    // Example 2: Endianness control
    println!("\n2. Endianness Control:");
    {
        let mut le = DynamicBuffer::with_endian(Endian::Little);
        let mut be = DynamicBuffer::with_endian(Endian::Big);

        le.put_u32(0x0102_0304, None);
        be.put_u32(0x0102_0304, None);

        println!("  0x01020304 little-endian: {:?}", le.export());
        println!("  0x01020304 big-endian:    {:?}", be.export());

        // Switching affects subsequent operations only
        le.set_endian(Endian::Big);
        le.put_u16(0x0A0B, None);
        println!("  After mid-stream switch:  {:?}", le.export());
    }

    // Example 3: Explicit cursors
    println!("\n3. Explicit Cursors:");
    {
        let mut buf = DynamicBuffer::new();

        // Writer uses the internal cursor
        for i in 0..4 {
            buf.put_i16(i * 10 - 15, None);
        }

        // Reader walks the same bytes independently
        let mut reader = Cursor::new();
        print!("  Values:");
        while reader.offset < buf.len() {
            print!(" {}", buf.get_i16(Some(&mut reader)));
        }
        println!();

        println!(
            "  Writer at {}, reader at {}",
            buf.position(),
            reader.offset
        );
    }

    // Example 4: Sparse writes and views
    println!("\n4. Sparse Writes and Views:");
    {
        let mut buf = DynamicBuffer::new();

        // Writing past the end zero-fills the gap
        buf.store_mut().set(9, 0xFF);
        println!("  Wrote one byte at index 9, length is {}", buf.len());
        println!("  Gap bytes read as zero: {:?}", buf.store().get_bytes(0, 4));

        // Views clamp to the available range
        let view = buf.store().slice(6, 64)?;
        println!("  slice(6, 64) clamps to {} bytes", view.len());

        // Only a reversed range is an error
        match buf.store().slice(5, 2) {
            Ok(_) => println!("  slice(5, 2) succeeded unexpectedly"),
            Err(e) => println!("  slice(5, 2) fails: {}", e),
        }
    }

    // Example 5: Bit packing
    println!("\n5. Bit Packing:");
    {
        let mut bits = BitStore::new();

        let flags = [true, false, true, true, false, false, true, false, true];
        for &flag in &flags {
            bits.put_bit(flag, None);
        }

        println!("  Packed {} bits into {} bytes", bits.len(), bits.byte_len());
        println!("  Raw bytes: {:?}", bits.export());

        bits.rewind();
        print!("  Unpacked:");
        for _ in 0..flags.len() {
            print!(" {}", bits.get_bit(None) as u8);
        }
        println!();
    }

    // Example 6: Performance test
    println!("\n6. Performance Test:");
    {
        const N: usize = 10_000;
        let mut buf = DynamicBuffer::new();

        let start = std::time::Instant::now();

        for i in 0..N {
            buf.import(&[]);
            buf.put_u32(i as u32, None);
            buf.put_u64(1_700_000_000_000_000_000 + i as u64, None);
            buf.put_f64(50_000.0 + (i % 1000) as f64 / 100.0, None);
            buf.put_u16(100 + (i as u16 % 900), None);
            buf.put_bool(i % 3 == 0, None);
            buf.put_str(if i % 3 == 0 { "AAPL" } else { "MSFT" }, None);

            buf.rewind();
            let record = (
                buf.get_u32(None),
                buf.get_u64(None),
                buf.get_f64(None),
                buf.get_u16(None),
                buf.get_bool(None),
                buf.get_string(None),
            );
            std::hint::black_box(record);
        }

        let elapsed = start.elapsed();
        let ns_per_op = elapsed.as_nanos() as u64 / N as u64;
        let ops_per_sec = N as f64 / elapsed.as_secs_f64();

        println!(
            "  {} roundtrips in {:.2}ms",
            N,
            elapsed.as_secs_f64() * 1000.0
        );
        println!("  {} ns/op, {:.0} ops/sec", ns_per_op, ops_per_sec);
    }

    // Example 7: Record size analysis
    println!("\n7. Record Size Analysis:");
    {
        let encode = |symbol: Option<&str>, note: Option<&str>| {
            let mut buf = DynamicBuffer::new();
            buf.put_u32(1, None);
            buf.put_u64(1000, None);
            buf.put_f64(50_000.0, None);
            buf.put_u16(100, None);
            buf.put_bool(symbol.is_some(), None);
            if let Some(s) = symbol {
                buf.put_str(s, None);
            }
            buf.put_bool(note.is_some(), None);
            if let Some(n) = note {
                buf.put_str(n, None);
            }
            buf.len()
        };

        let sizes = [
            ("Minimal record", encode(None, None)),
            ("Record + symbol", encode(Some("AAPL"), None)),
            (
                "Record + symbol + note",
                encode(Some("AAPL"), Some("Buy order")),
            ),
        ];

        for (name, size) in sizes {
            println!("  {}: {} bytes", name, size);
        }

        println!("  String length prefix: {} bytes", STRING_PREFIX_SIZE);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
