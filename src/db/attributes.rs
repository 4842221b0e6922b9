//! Attribute description table
//!
//! The first entry added for an ID is the fallback used when smartctl
//! reports a name the table does not know; the rest are vendor overrides
//! keyed by the reported name. Sources: the smartmontools default name
//! table and drivedb.h overrides, plus assorted vendor documentation.

use super::AttributeDatabase;
use crate::property::DiskClass::{Any, Hdd, Ssd};

/// Shared explanation of pending sector reallocation
pub(super) const UNC_TEXT: &str = "When a drive encounters a surface error, it marks that sector as &quot;unstable&quot; (also known as &quot;pending reallocation&quot;). \
If the sector is successfully read from or written to at some later point, it is unmarked. If the sector continues to be inaccessible, \
the drive reallocates (remaps) it to a specially reserved area as soon as it has a chance (usually during write request or successful read), \
transferring the data so that no changes are reported to the operating system. This is why you generally don't see &quot;bad blocks&quot; \
on modern drives - if you do, it means that either they have not been remapped yet, or the drive is out of reserved area.\
\n\nNote: SSDs reallocate blocks as part of their normal operation, so low reallocation counts are not critical for them.";

/// Append the shared reallocation paragraph to a description
fn with_unc(base: &str) -> String {
    format!("{base}\n\n{UNC_TEXT}")
}

/// Internal vendor-reserved attribute text
const INTERNAL: &str = "This attribute has been reserved by vendor as internal.";
/// Shared bad-block count text
const BAD_BLOCKS: &str = "Number of bad blocks. SSDs reallocate blocks as part of their normal operation, so low bad block counts are not critical for them.";

/// Fill the attribute description database
#[expect(clippy::too_many_lines)]
pub(super) fn populate(db: &mut AttributeDatabase) {
    db.add(1, Any, "Raw_Read_Error_Rate", "Raw Read Error Rate", "",
        "Indicates the rate of read errors that occurred while reading the data. A non-zero Raw value may indicate a problem with either the disk surface or read/write heads. \
        <i>Note:</i> Some drives (e.g. Seagate) are known to report very high Raw values for this attribute; this is not an indication of a problem.");
    db.add(2, Any, "Throughput_Performance", "Throughput Performance", "",
        "Average efficiency of a drive. Reduction of this attribute value can signal various internal problems.");
    db.add(3, Any, "Spin_Up_Time", "Spin-Up Time", "",
        "Average time of spindle spin-up time (from stopped to fully operational). Raw value may show this in milliseconds or seconds. Changes in spin-up time can reflect problems with the spindle motor or power.");
    db.add(4, Any, "Start_Stop_Count", "Start / Stop Count", "",
        "Number of start/stop cycles of a spindle (Raw value). That is, number of drive spin-ups.");
    db.add(5, Hdd, "Reallocated_Sector_Ct", "Reallocated Sector Count", "attr_reallocated_sector_count",
        &with_unc("Number of reallocated sectors (Raw value). Non-zero Raw value indicates a disk surface failure."));
    db.add(5, Ssd, "Reallocated_Sector_Ct", "Reallocated Sector Count", "attr_reallocated_sector_count",
        "Number of reallocated sectors (Raw value). High Raw value indicates an old age for an SSD.");
    // SandForce
    db.add(5, Ssd, "Retired_Block_Count", "Retired Block Rate", "attr_ssd_life_left",
        "Indicates estimated remaining life of the drive. Normalized value is (100-100*RBC/MRB) where RBC is the number of retired blocks and MRB is the minimum required blocks.");
    db.add(5, Ssd, "Reallocate_NAND_Blk_Cnt", "Reallocated NAND Block Count", "",
        "Number of reallocated blocks (Raw value). High Raw value indicates an old age for an SSD.");
    db.add(5, Ssd, "Reallocated_Block_Count", "Reallocated Block Count", "",
        "Number of reallocated blocks (Raw value). High Raw value indicates an old age for an SSD.");
    db.add(5, Ssd, "Runtime_Bad_Block", "Runtime Bad Block Count", "", "");
    db.add(5, Ssd, "Later_Bad_Block", "Later Bad Block", "", "");
    db.add(6, Hdd, "Read_Channel_Margin", "Read Channel Margin", "",
        "Margin of a channel while reading data. The function of this attribute is not specified.");
    db.add(7, Hdd, "Seek_Error_Rate", "Seek Error Rate", "",
        "Frequency of errors appearance while positioning. When a drive reads data, it positions heads in the needed place. If there is a failure in the mechanical positioning system, a seek error arises. More seek errors indicate worse condition of a disk surface and disk mechanical subsystem. The exact meaning of the Raw value is manufacturer-dependent.");
    db.add(8, Hdd, "Seek_Time_Performance", "Seek Time Performance", "",
        "Average efficiency of seek operations of the magnetic heads. If this value is decreasing, it is a sign of problems in the hard disk drive mechanical subsystem.");
    db.add(9, Any, "Power_On_Hours", "Power-On Time", "",
        "Number of hours in power-on state. Raw value shows total count of hours (or minutes, or half-minutes, or seconds, depending on manufacturer) in power-on state.");
    db.add_ref(9, Ssd, "Power_On_Hours_and_Msec");
    db.add(9, Ssd, "Proprietary_9", "Internal Attribute", "", INTERNAL);
    db.add(10, Hdd, "Spin_Retry_Count", "Spin-Up Retry Count", "attr_spin_up_retry_count",
        "Number of retries of spin start attempts (Raw value). An increase of this attribute value is a sign of problems in the hard disk mechanical subsystem.");
    db.add(11, Hdd, "Calibration_Retry_Count", "Calibration Retry Count", "",
        "Number of times recalibration was requested, under the condition that the first attempt was unsuccessful (Raw value). A decrease is a sign of problems in the hard disk mechanical subsystem.");
    db.add(12, Any, "Power_Cycle_Count", "Power Cycle Count", "",
        "Number of complete power start / stop cycles of a drive.");
    db.add(13, Any, "Read_Soft_Error_Rate", "Soft Read Error Rate", "attr_soft_read_error_rate",
        "Uncorrected read errors reported to the operating system (Raw value). If the value is non-zero, you should back up your data.");
    db.add_ref(13, Ssd, "Soft_Read_Error_Rate");
    db.add(99, Hdd, "", "Average FHC (Flying Height Control)", "", "");
    db.add(100, Ssd, "Gigabytes_Erased", "GiB Erased", "", "Number of GiB erased.");
    db.add(100, Ssd, "Total_Blocks_Erased", "Total Blocks Erased", "", "Number of total blocks erased.");
    db.add(100, Ssd, "", "Erase / Program Cycles", "",
        "Number of Erase / Program cycles of the entire drive.");
    db.add(101, Hdd, "", "Maximum FHC (Flying Height Control)", "", "");
    db.add(103, Ssd, "", "Translation Table Rebuild", "",
        "Indicates power backup fault or internal error resulting in loss of system unit tables.");
    db.add(130, Ssd, "Minimum_Spares_All_Zs", "Minimum Spares All Zs", "", "");
    db.add(148, Ssd, "Total_SLC_Erase_Ct", "Total SLC Erase Count", "", "");
    db.add(149, Ssd, "Max_SLC_Erase_Ct", "Maximum SLC Erase Count", "", "");
    db.add(150, Ssd, "Min_SLC_Erase_Ct", "Minimum SLC Erase Count", "", "");
    db.add(151, Ssd, "Average_SLC_Erase_Ct", "Average SLC Erase Count", "", "");
    db.add(160, Ssd, "Initial_Bad_Block_Count", "Initial Bad Block Count", "", "");
    db.add(160, Ssd, "Uncorrectable_Error_Cnt", "Uncorrectable Error Count", "", "");
    db.add(161, Ssd, "Bad_Block_Count", "Bad Block Count", "", BAD_BLOCKS);
    db.add(161, Ssd, "Number_of_Pure_Spare", "Number of Pure Spare", "", "");
    db.add(161, Ssd, "Valid_Spare_Block_Cnt", "Valid Spare Block Count", "",
        "Number of available spare blocks. Spare blocks are used when bad blocks develop.");
    db.add(162, Ssd, "Spare_Block_Count", "Spare Block Count", "",
        "Number of spare blocks which are used when bad blocks develop.");
    db.add(162, Ssd, "Child_Pair_Count", "Child Pair Count", "", "");
    db.add(163, Ssd, "Max_Erase_Count", "Maximum Erase Count", "",
        "The maximum of individual erase counts of all the blocks.");
    db.add(163, Ssd, "Initial_Bad_Block_Count", "Initial Bad Block Count", "",
        "Factory-determined number of initial bad blocks.");
    db.add(163, Ssd, "Total_Bad_Block_Count", "Total Bad Block Count", "", BAD_BLOCKS);
    db.add(164, Ssd, "Average_Erase_Count", "Average Erase Count", "", "");
    db.add(164, Ssd, "Total_Erase_Count", "Total Erase Count", "", "");
    db.add(165, Ssd, "Average_Erase_Count", "Average Erase Count", "", "");
    db.add(165, Ssd, "Max_Erase_Count", "Maximum Erase Count", "", "");
    db.add(165, Ssd, "Total_Write/Erase_Count", "Total Write / Erase Count", "", "");
    db.add(166, Ssd, "Later_Bad_Block_Count", "Later Bad Block Count", "", "");
    db.add(166, Ssd, "Min_Erase_Count", "Minimum Erase Count", "", "");
    db.add(166, Ssd, "Min_W/E_Cycle", "Minimum Write / Erase Cycles", "", "");
    db.add(167, Ssd, "SSD_Protect_Mode", "SSD Protect Mode", "", "");
    db.add(167, Ssd, "Average_Erase_Count", "Average Erase Count", "", "");
    db.add(167, Ssd, "Min_Bad_Block/Die", "Minimum Bad Block / Die", "", "");
    db.add(168, Ssd, "SATA_PHY_Err_Ct", "SATA Physical Error Count", "", "");
    db.add(168, Ssd, "SATA_Phy_Error_Count", "SATA Physical Error Count", "", "");
    db.add(168, Ssd, "Max_Erase_Count_of_Spec", "Maximum Erase Count per Specification", "", "");
    db.add(168, Ssd, "Maximum_Erase_Cycle", "Maximum Erase Cycles", "", "");
    db.add(169, Ssd, "Bad_Block_Count", "Bad Block Count", "", BAD_BLOCKS);
    db.add(169, Ssd, "Total_Bad_Blocks", "Total Bad Blocks", "", BAD_BLOCKS);
    db.add(169, Ssd, "Remaining_Lifetime_Perc", "Remaining Lifetime %", "attr_ssd_life_left",
        "Remaining drive life in % (usually by erase count).");
    db.add(170, Ssd, "Reserve_Block_Count", "Reserved Block Count", "",
        "Number of reserved (spare) blocks for bad block handling.");
    db.add(170, Ssd, "Reserved_Block_Count", "Reserved Block Count", "",
        "Number of reserved (spare) blocks for bad block handling.");
    db.add(170, Ssd, "Grown_Failing_Block_Ct", "Grown Failing Block Count", "", "");
    db.add(170, Ssd, "Available_Reservd_Space", "Available Reserved Space", "", "");
    db.add(170, Ssd, "Bad_Block_Count", "Bad Block Count", "", BAD_BLOCKS);
    db.add(170, Ssd, "Bad_Blk_Ct_Erl/Lat", "Bad Block Early / Later", "", "");
    db.add(170, Ssd, "Unused_Rsvd_Blk_Ct_Chip", "Unused Reserved Block Count (Chip)", "", "");
    db.add(170, Ssd, "Spare_Block_Count", "Spare Block Count", "",
        "Number of spare blocks which are used in case bad blocks develop.");
    db.add(171, Ssd, "Program_Fail_Count", "Program Fail Count", "",
        "Number of flash program (write) failures. High values may indicate old drive age or other problems.");
    db.add(171, Ssd, "Program_Fail_Count_Chip", "Program Fail Count (Chip)", "", "");
    db.add(171, Ssd, "Avail_OP_Block_Count", "Available OP Block Count", "", "");
    db.add(172, Ssd, "Erase_Fail_Count", "Erase Fail Count", "",
        "Number of flash erase command failures. High values may indicate old drive age or other problems.");
    db.add(173, Ssd, "Erase_Count", "Erase Count", "", "");
    db.add(173, Ssd, "Erase_Fail_Count_Chip", "Erase Fail Count (Chip)", "", "");
    db.add(173, Ssd, "MaxAvgErase_Ct", "Maximum / Average Erase Count", "", "");
    db.add(173, Ssd, "Ave_Block-Erase_Count", "Average Block-Erase Count", "", "");
    db.add(173, Ssd, "Wear_Leveling_Count", "Wear Leveling Count", "",
        "Indicates the difference between the most worn block and the least worn block.");
    // same, old smartctl spelling
    db.add(173, Ssd, "Wear_Levelling_Count", "Wear Leveling Count", "",
        "Indicates the difference between the most worn block and the least worn block.");
    db.add(173, Ssd, "Avg_Write/Erase_Count", "Average Write / Erase Count", "", "");
    db.add(174, Ssd, "Unexpect_Power_Loss_Ct", "Unexpected Power Loss Count", "",
        "Number of unexpected power loss events.");
    db.add(174, Ssd, "Pwr_Cycle_Ct_Unplanned", "Unexpected Power Loss Count", "",
        "Number of unexpected power loss events.");
    // Apple
    db.add(174, Ssd, "Host_Reads_MiB", "Host Read (MiB)", "",
        "Total number of sectors read by the host system. The Raw value is increased by 1 for every MiB read by the host.");
    db.add(175, Ssd, "Program_Fail_Count_Chip", "Program Fail Count (Chip)", "",
        "Number of flash program (write) failures. High values may indicate old drive age or other problems.");
    db.add(175, Ssd, "Bad_Cluster_Table_Count", "Bad Cluster Table Count", "", "");
    db.add(175, Ssd, "Power_Loss_Cap_Test", "Power Loss Capacitor Test", "", "");
    db.add(175, Ssd, "Host_Writes_MiB", "Host Written (MiB)", "",
        "Total number of sectors written by the host system. The Raw value is increased by 1 for every MiB written by the host.");
    db.add(176, Ssd, "Erase_Fail_Count_Chip", "Erase Fail Count (Chip)", "",
        "Number of flash erase command failures. High values may indicate old drive age or other problems.");
    db.add(176, Ssd, "Uncorr_RECORD_Count", "Uncorrected RECORD Count", "", "");
    db.add(176, Ssd, "RANGE_RECORD_Count", "RANGE RECORD Count", "", "");
    db.add(177, Ssd, "Wear_Leveling_Count", "Wear Leveling Count", "",
        "Indicates the difference (in percent) between the most worn block and the least worn block.");
    db.add(177, Ssd, "Wear_Range_Delta", "Wear Range Delta", "",
        "Indicates the difference (in percent) between the most worn block and the least worn block.");
    db.add(178, Ssd, "Used_Rsvd_Blk_Cnt_Chip", "Used Reserved Block Count (Chip)", "",
        "Number of a chip's used reserved blocks. High values may indicate old drive age or other problems.");
    db.add(178, Ssd, "Runtime_Invalid_Blk_Cnt", "Runtime Invalid Block Count", "", "");
    db.add(179, Ssd, "Used_Rsvd_Blk_Cnt_Tot", "Used Reserved Block Count (Total)", "",
        "Number of used reserved blocks. High values may indicate old drive age or other problems.");
    db.add(180, Ssd, "Unused_Rsvd_Blk_Cnt_Tot", "Unused Reserved Block Count (Total)", "",
        "Number of unused reserved blocks. High values may indicate old drive age or other problems.");
    db.add(180, Ssd, "Unused_Reserve_NAND_Blk", "Unused Reserved NAND Blocks", "", "");
    db.add(181, Any, "Program_Fail_Cnt_Total", "Program Fail Count", "",
        "Number of flash program (write) failures. High values may indicate old drive age or other problems.");
    db.add_ref(181, Ssd, "Program_Fail_Count");
    db.add(181, Ssd, "Non4k_Aligned_Access", "Non-4k Aligned Access", "", "");
    db.add(182, Ssd, "Erase_Fail_Count_Total", "Erase Fail Count", "",
        "Number of flash erase command failures. High values may indicate old drive age or other problems.");
    db.add_ref(182, Ssd, "Erase_Fail_Count");
    db.add(183, Any, "Runtime_Bad_Block", "Runtime Bad Blocks", "", "");
    db.add(183, Any, "SATA_Iface_Downshift", "SATA Downshift Error Count", "", "");
    db.add(183, Any, "SATA_Interfac_Downshift", "SATA Downshift Error Count", "", "");
    db.add(183, Ssd, "SATA_Downshift_Count", "SATA Downshift Error Count", "", "");
    db.add(184, Any, "End-to-End_Error", "End to End Error", "",
        "Indicates discrepancy of data between the host and the drive cache.");
    db.add(184, Ssd, "IO_Error_Detect_Code_Ct", "Input/Output ECC Error Count", "", "");
    db.add(184, Ssd, "Factory_Bad_Block_Count", "Factory Bad Block Count", "", "");
    db.add(184, Ssd, "Initial_Bad_Block_Count", "Initial Bad Block Count", "",
        "Factory-determined number of initial bad blocks.");
    db.add(184, Ssd, "Error_Correction_Count", "Error Correction Count", "", "");
    db.add(185, Hdd, "", "Head Stability", "", "");
    db.add(185, Hdd, "", "Induced Op-Vibration Detection", "", "");
    db.add(187, Any, "Reported_Uncorrect", "Reported Uncorrectable", "",
        "Number of errors that could not be recovered using hardware ECC (Error-Correcting Code).");
    db.add_ref(187, Ssd, "Uncorrectable_Error_Cnt");
    db.add(187, Ssd, "Total_Unc_NAND_Reads", "Total Uncorrectable NAND Reads", "", "");
    db.add(188, Any, "Command_Timeout", "Command Timeout", "",
        "Number of aborted operations due to drive timeout. High values may indicate problems with cabling or power supply.");
    db.add(188, Ssd, "Command_Timeouts", "Command Timeout", "",
        "Number of aborted operations due to drive timeout. High values may indicate problems with cabling or power supply.");
    db.add(189, Hdd, "High_Fly_Writes", "High Fly Writes", "",
        "Some drives can detect when a recording head is flying outside its normal operating range. \
        If an unsafe fly height condition is encountered, the write process is stopped, and the information \
        is rewritten or reallocated to a safe region of the drive. This attribute indicates the count of \
        these errors detected over the lifetime of the drive.");
    db.add(189, Ssd, "Factory_Bad_Block_Ct", "Factory Bad Block Count", "",
        "Factory-determined number of initial bad blocks.");
    db.add(189, Any, "Airflow_Temperature_Cel", "Airflow Temperature", "",
        "Indicates temperature (in Celsius), 100 - temperature, or something completely different (highly depends on manufacturer and model).");
    db.add(190, Any, "Airflow_Temperature_Cel", "Airflow Temperature", "",
        "Indicates temperature (in Celsius), 100 - temperature, or something completely different (highly depends on manufacturer and model).");
    db.add(190, Any, "Temperature_Exceed_Cnt", "Temperature Exceed Count", "", "");
    db.add(190, Any, "Temperature_Celsius", "Temperature (Celsius)", "attr_temperature_celsius",
        "Drive temperature. The Raw value shows built-in heat sensor registrations (in Celsius).");
    db.add(190, Any, "Temperature_Case", "Case Temperature (Celsius)", "",
        "Drive case temperature. The Raw value shows built-in heat sensor registrations (in Celsius).");
    db.add(191, Hdd, "G-Sense_Error_Rate", "G-Sense Error Rate", "",
        "Number of errors caused by externally-induced shock and vibration (Raw value). May indicate incorrect installation.");
    db.add(192, Hdd, "Power-Off_Retract_Count", "Head Retract Cycle Count", "",
        "Number of times the heads were loaded off the media (during power-offs or emergency conditions).");
    db.add(192, Ssd, "Unsafe_Shutdown_Count", "Unsafe Shutdown Count", "",
        "Raw value indicates the number of unsafe (unclean) shutdown events over the drive lifetime. \
        An unsafe shutdown occurs whenever the device is powered off without \
        STANDBY IMMEDIATE being the last command.");
    db.add(192, Ssd, "Unexpect_Power_Loss_Ct", "Unexpected Power Loss Count", "",
        "Number of unexpected power loss events.");
    db.add(192, Hdd, "Emerg_Retract_Cycle_Ct", "Emergency Retract Cycle Count", "",
        "Number of times the heads were loaded off the media during emergency conditions.");
    db.add(193, Hdd, "Load_Cycle_Count", "Load / Unload Cycle", "",
        "Number of load / unload cycles into Landing Zone position.");
    db.add(194, Any, "Temperature_Celsius", "Temperature (Celsius)", "attr_temperature_celsius",
        "Drive temperature. The Raw value shows built-in heat sensor registrations (in Celsius). Increases in average drive temperature often signal spindle motor problems (unless the increases are caused by environmental factors).");
    db.add(194, Ssd, "Airflow_Temperature", "Airflow Temperature (Celsius)", "attr_temperature_celsius",
        "Drive temperature (Celsius)");
    db.add(194, Any, "Temperature_Celsius_x10", "Temperature (Celsius) x 10", "attr_temperature_celsius_x10",
        "Drive temperature. The Raw value shows built-in heat sensor registrations (in Celsius * 10). Increases in average drive temperature often signal spindle motor problems (unless the increases are caused by environmental factors).");
    db.add(194, Ssd, "Proprietary_194", "Internal Attribute", "", INTERNAL);
    db.add(194, Any, "Temperature_Internal", "Internal Temperature (Celsius)", "attr_temperature_celsius",
        "Drive case temperature. The Raw value shows built-in heat sensor registrations (in Celsius).");
    db.add(195, Any, "Hardware_ECC_Recovered", "Hardware ECC Recovered", "",
        "Number of ECC on the fly errors (Raw value). Users are advised to ignore this attribute.");
    db.add_ref(195, Hdd, "ECC_On_The_Fly_Count");
    db.add(195, Ssd, "ECC_Uncorr_Error_Count", "Uncorrected ECC Error Count", "",
        "Number of uncorrectable errors (UECC).");
    db.add(195, Ssd, "ECC_Rate", "Uncorrected ECC Error Rate", "", "");
    db.add(195, Ssd, "Total_Prog_Failures", "Total Program Failures", "", "");
    db.add(195, Ssd, "Program_Failure_Blk_Ct", "Program Failure Block Count", "",
        "Number of flash program (write) failures.");
    db.add(195, Ssd, "Cumulativ_Corrected_ECC", "Cumulative Corrected ECC Error Count", "", "");
    db.add(196, Any, "Reallocated_Event_Count", "Reallocation Event Count", "attr_reallocation_event_count",
        &with_unc("Number of reallocation (remap) operations. Raw value <i>should</i> show the total number of attempts (both successful and unsuccessful) to reallocate sectors. An increase in Raw value indicates a disk surface failure."));
    db.add(196, Ssd, "Erase_Failure_Blk_Ct", "Erase Failure Block Count", "",
        "Number of flash erase failures.");
    db.add(196, Ssd, "Total_Erase_Failures", "Total Erase Failures", "", "");
    db.add(197, Any, "Current_Pending_Sector", "Current Pending Sector Count", "attr_current_pending_sector_count",
        &with_unc("Number of &quot;unstable&quot; (waiting to be remapped) sectors (Raw value). If the unstable sector is subsequently read from or written to successfully, this value is decreased and the sector is not remapped. An increase in Raw value indicates a disk surface failure."));
    db.add(197, Ssd, "Read_Failure_Blk_Ct", "Read Failure Block Count", "",
        "Number of blocks that failed to be read.");
    // Samsung; unlike Current_Pending_Sector, this won't decrease on reallocation
    db.add(197, Any, "Total_Pending_Sectors", "Total Pending Sectors", "attr_total_pending_sectors",
        &with_unc("Number of &quot;unstable&quot; (waiting to be remapped) sectors and already remapped sectors (Raw value). An increase in Raw value indicates a disk surface failure."));
    db.add(197, Ssd, "Total_Unc_Read_Failures", "Total Uncorrectable Read Failures", "", "");
    db.add(198, Any, "Offline_Uncorrectable", "Offline Uncorrectable", "attr_offline_uncorrectable",
        &with_unc("Number of sectors which couldn't be corrected during Offline Data Collection (Raw value). An increase in Raw value indicates a disk surface failure. \
        The value may be decreased automatically when the errors are corrected (e.g., when an unreadable sector is reallocated and the next Offline test is run to see the change)."));
    db.add(198, Any, "Total_Offl_Uncorrectabl", "Total Offline Uncorrectable", "attr_total_attr_offline_uncorrectable",
        &with_unc("Number of sectors which couldn't be corrected during Offline Data Collection (Raw value), currently and in the past. An increase in Raw value indicates a disk surface failure."));
    db.add_ref(198, Ssd, "Uncorrectable_Sector_Ct");
    db.add(198, Ssd, "Read_Sectors_Tot_Ct", "Total Read Sectors", "",
        "Total count of read sectors.");
    db.add(198, Ssd, "Host_Reads_GiB", "Host Read (GiB)", "",
        "Total number of sectors read by the host system. The Raw value is increased by 1 for every GiB read by the host.");
    db.add_ref(198, Hdd, "Offline_Scan_UNC_SectCt");
    db.add_ref(198, Hdd, "Off-line_Scan_UNC_Sector_Ct");
    db.add(199, Any, "UDMA_CRC_Error_Count", "UDMA CRC Error Count", "",
        "Number of errors in data transfer via the interface cable in UDMA mode, as determined by ICRC (Interface Cyclic Redundancy Check) (Raw value).");
    db.add(199, Any, "SATA_CRC_Error_Count", "SATA CRC Error Count", "",
        "Number of errors in data transfer via the SATA interface cable (Raw value).");
    db.add(199, Any, "SATA_CRC_Error", "SATA CRC Error Count", "",
        "Number of errors in data transfer via the SATA interface cable (Raw value).");
    db.add(199, Any, "CRC_Error_Count", "CRC Error Count", "",
        "Number of errors in data transfer via the interface cable (Raw value).");
    db.add(199, Ssd, "Write_Sectors_Tot_Ct", "Total Written Sectors", "",
        "Total count of written sectors.");
    db.add(198, Ssd, "Host_Writes_GiB", "Host Written (GiB)", "",
        "Total number of sectors written by the host system. The Raw value is increased by 1 for every GiB written by the host.");
    db.add(200, Hdd, "Multi_Zone_Error_Rate", "Multi Zone Error Rate", "",
        "Number of errors found when writing to sectors (Raw value). The higher the value, the worse the disk surface condition and/or mechanical subsystem is.");
    db.add(200, Hdd, "Write_Error_Count", "Write Error Count", "",
        "Number of errors found when writing to sectors (Raw value). The higher the value, the worse the disk surface condition and/or mechanical subsystem is.");
    db.add(200, Ssd, "Read_Commands_Tot_Ct", "Total Read Commands Issued", "",
        "Total count of read commands issued.");
    db.add(201, Hdd, "Soft_Read_Error_Rate", "Soft Read Error Rate", "attr_soft_read_error_rate",
        "Uncorrected read errors reported to the operating system (Raw value). If the value is non-zero, you should back up your data.");
    db.add_ref(201, Ssd, "Unc_Soft_Read_Err_Rate");
    db.add(201, Ssd, "Supercap_Status", "Supercapacitor Health", "", "");
    db.add(201, Hdd, "Detected_TA_Count", "Torque Amplification Count", "",
        "Number of attempts to compensate for platter speed variations.");
    db.add(201, Ssd, "Write_Commands_Tot_Ct", "Total Write Commands Issued", "",
        "Total count of write commands issued.");
    db.add(202, Hdd, "Data_Address_Mark_Errs", "Data Address Mark Errors", "",
        "Frequency of the Data Address Mark errors.");
    db.add(202, Hdd, "TA_Increase_Count", "TA Increase Count", "",
        "Number of attempts to compensate for platter speed variations.");
    db.add(202, Ssd, "Error_Bits_Flash_Tot_Ct", "Total Count of Error Bits", "", "");
    db.add(202, Ssd, "Percent_Lifetime_Used", "Rated Life Used (%)", "attr_ssd_life_used",
        "Used drive life in %.");
    db.add(202, Ssd, "Exception_Mode_Status", "Exception Mode Status", "", "");
    db.add(202, Ssd, "Total_Read_Bits_Corr_Ct", "Total Read Bits Corrected", "", "");
    db.add(202, Ssd, "Percent_Lifetime_Remain", "Remaining Lifetime (%)", "attr_ssd_life_left",
        "Remaining drive life in %.");
    db.add(203, Any, "Run_Out_Cancel", "Run Out Cancel", "", "Number of ECC errors.");
    db.add(203, Hdd, "Corr_Read_Errors_Tot_Ct", "ECC Errors", "", "Number of ECC errors.");
    db.add(203, Ssd, "Corr_Read_Errors_Tot_Ct", "Total Corrected Read Errors", "",
        "Total cound of read sectors with correctable errors.");
    db.add(204, Hdd, "Soft_ECC_Correction", "Soft ECC Correction", "",
        "Number of errors corrected by software ECC (Error-Correcting Code).");
    db.add(204, Hdd, "Shock_Count_Write_Opern", "Shock Count During Write Operation", "", "");
    db.add(204, Ssd, "Soft_ECC_Correct_Rate", "Soft ECC Correction Rate", "", "");
    db.add(204, Ssd, "Bad_Block_Full_Flag", "Bad Block Area Is Full", "",
        "Indicates whether the bad block (reserved) area is full or not.");
    db.add(205, Any, "Thermal_Asperity_Rate", "Thermal Asperity Rate", "",
        "Number of problems caused by high temperature.");
    db.add(205, Hdd, "Shock_Rate_Write_Opern", "Shock Rate During Write Operation", "", "");
    db.add(205, Ssd, "Max_PE_Count_Spec", "Maximum Program-Erase Count Specification", "",
        "Maximum Program / Erase cycle count as per specification.");
    db.add(205, Ssd, "Max_Rated_PE_Count", "Maximum Rated Program-Erase Count", "",
        "Maximum Program / Erase cycle count as per specification.");
    db.add(206, Hdd, "Flying_Height", "Head Flying Height", "",
        "The height of the disk heads above the disk surface. A downward trend will often predict a head crash, \
        while high values may cause read / write errors.");
    db.add(206, Ssd, "Min_Erase_Count", "Minimum Erase Count", "",
        "The minimum of individual erase counts of all the blocks.");
    db.add(206, Ssd, "Write_Error_Rate", "Write Error Rate", "", "");
    db.add(207, Hdd, "Spin_High_Current", "Spin High Current", "",
        "Amount of high current needed or used to spin up the drive.");
    db.add(207, Ssd, "Max_Erase_Count", "Maximum Erase Count", "", "");
    db.add(208, Hdd, "Spin_Buzz", "Spin Buzz", "",
        "Number of buzz routines (retries because of low current) to spin up the drive.");
    db.add(208, Ssd, "Average_Erase_Count", "Average Erase Count", "",
        "The average of individual erase counts of all the blocks.");
    db.add(209, Hdd, "Offline_Seek_Performnce", "Offline Seek Performance", "",
        "Seek performance during Offline Data Collection operations.");
    db.add(209, Ssd, "Remaining_Lifetime_Perc", "Remaining Lifetime (%)", "attr_ssd_life_left",
        "Remaining drive life in % (usually by erase count).");
    db.add(210, Hdd, "", "Vibration During Write", "",
        "Vibration encountered during write operations.");
    db.add(210, Ssd, "SATA_CRC_Error_Count", "SATA CRC Error Count", "", "");
    db.add(210, Ssd, "Indilinx_Internal", "Internal Attribute", "", INTERNAL);
    db.add(210, Ssd, "Success_RAIN_Recov_Cnt", "Success RAIN Recovered Count", "", "");
    db.add(211, Hdd, "", "Vibration During Read", "",
        "Vibration encountered during read operations.");
    db.add(211, Ssd, "SATA_Error_Ct_CRC", "SATA CRC Error Count", "",
        "Number of errors in data transfer via the SATA interface cable");
    db.add(211, Ssd, "SATA_UNC_Count", "SATA Uncorrectable Error Count", "",
        "Number of errors in data transfer via the SATA interface cable");
    db.add(212, Hdd, "", "Shock During Write", "",
        "Shock encountered during write operations");
    db.add(212, Ssd, "SATA_Error_Ct_Handshake", "SATA Handshake Error Count", "",
        "Number of errors occurring during SATA handshake.");
    db.add(212, Ssd, "Pages_Requiring_Rd_Rtry", "Pages Requiring Read Retry", "", "");
    db.add(212, Ssd, "NAND_Reads_with_Retry", "Number of NAND Reads with Retry", "", "");
    db.add(212, Ssd, "SATA_PHY_Error", "SATA Physical Error Count", "", "");
    db.add(213, Ssd, "Indilinx_Internal", "Internal Attribute", "", INTERNAL);
    db.add(213, Ssd, "Simple_Rd_Rtry_Attempts", "Simple Read Retry Attempts", "", "");
    db.add(213, Ssd, "Snmple_Retry_Attempts", "Simple Retry Attempts", "", "");
    db.add(213, Ssd, "Simple_Retry_Attempts", "Simple Retry Attempts", "", "");
    db.add(213, Ssd, "Adaptv_Rd_Rtry_Attempts", "Adaptive Read Retry Attempts", "", "");
    db.add(214, Ssd, "Adaptive_Retry_Attempts", "Adaptive Retry Attempts", "", "");
    db.add(218, Ssd, "CRC_Error_Count", "CRC Error Count", "", "");
    db.add(220, Hdd, "Disk_Shift", "Disk Shift", "",
        "Shift of disks towards spindle. Shift of disks is possible as a result of a strong shock or a fall, high temperature, or some other reasons.");
    db.add(221, Hdd, "G-Sense_Error_Rate", "G-Sense Error Rate", "",
        "Number of errors resulting from externally-induced shock and vibration (Raw value). May indicate incorrect installation.");
    db.add(213, Ssd, "Int_Data_Path_Prot_Unc", "Internal Data Path Protection Uncorrectable", "", "");
    db.add(222, Hdd, "Loaded_Hours", "Loaded Hours", "",
        "Number of hours spent operating under load (movement of magnetic head armature) (Raw value)");
    db.add(222, Ssd, "RAID_Recovery_Count", "RAID Recovery Count", "", "");
    db.add(223, Hdd, "Load_Retry_Count", "Load / Unload Retry Count", "",
        "Number of times the head armature entered / left the data zone.");
    db.add(224, Hdd, "Load_Friction", "Load Friction", "",
        "Resistance caused by friction in mechanical parts while operating. An increase of Raw value may mean that there is a problem with the mechanical subsystem of the drive.");
    db.add(224, Ssd, "In_Warranty", "In Warranty", "", "");
    db.add(225, Hdd, "Load_Cycle_Count", "Load / Unload Cycle Count", "",
        "Total number of load cycles.");
    db.add(225, Ssd, "Host_Writes_32MiB", "Host Written (32 MiB)", "",
        "Total number of sectors written by the host system. The Raw value is increased by 1 for every 32 MiB written by the host.");
    db.add(225, Ssd, "DAS_Polarity", "DAS Polarity", "", "");
    db.add(225, Ssd, "Data_Log_Write_Count", "Data Log Write Count", "", "");
    db.add(226, Hdd, "Load-in_Time", "Load-in Time", "",
        "Total time of loading on the magnetic heads actuator. Indicates total time in which the drive was under load (on the assumption that the magnetic heads were in operating mode and out of the parking area).");
    db.add(226, Ssd, "Intel_Internal", "Internal Attribute", "", INTERNAL);
    db.add(226, Ssd, "Workld_Media_Wear_Indic", "Timed Workload Media Wear", "",
        "Timed workload media wear indicator (percent*1024)");
    db.add(226, Ssd, "Partial_Pfail", "Partial Program Fail", "", "");
    db.add(227, Hdd, "Torq-amp_Count", "Torque Amplification Count", "",
        "Number of attempts to compensate for platter speed variations.");
    db.add(227, Ssd, "Intel_Internal", "Internal Attribute", "", INTERNAL);
    db.add(227, Ssd, "Workld_Host_Reads_Perc", "Timed Workload Host Reads %", "", "");
    db.add(228, Any, "Power-off_Retract_Count", "Power-Off Retract Count", "",
        "Number of times the magnetic armature was retracted automatically as a result of power loss.");
    db.add(228, Ssd, "Intel_Internal", "Internal Attribute", "", INTERNAL);
    db.add(228, Ssd, "Workload_Minutes", "Workload (Minutes)", "", "");
    db.add(229, Ssd, "Halt_System_ID", "Halt System ID", "", "Halt system ID and flash ID");
    db.add(229, Ssd, "Flash_ID", "Flash ID", "", "Flash ID");
    db.add(230, Hdd, "Head_Amplitude", "GMR Head Amplitude", "",
        "Amplitude of heads trembling (GMR-head) in running mode.");
    db.add(230, Ssd, "Life_Curve_Status", "Life Curve Status", "",
        "Current state of drive operation based upon the Life Curve.");
    db.add(230, Ssd, "SuperCap_Charge_Status", "Super-Capacitor Charge Status", "",
        "0 means not charged, 1 - fully charged, 2 - unknown.");
    db.add(230, Ssd, "Write_Throttling", "Write Throttling", "", "");
    db.add(230, Ssd, "Perc_Write/Erase_Count", "Write / Erase Count (%)", "", "");
    db.add(231, Any, "Temperature_Celsius", "Temperature", "attr_temperature_celsius",
        "Drive temperature. The Raw value shows built-in heat sensor registrations (in Celsius). Increases in average drive temperature often signal spindle motor problems (unless the increases are caused by environmental factors).");
    db.add(231, Ssd, "SSD_Life_Left", "SSD Life Left", "attr_ssd_life_left",
        "A measure of drive's estimated life left. A Normalized value of 100 indicates a new drive. \
        10 means there are reserved blocks left but Program / Erase cycles have been used. \
        0 means insufficient reserved blocks, drive may be in read-only mode to allow recovery of the data.");
    db.add(232, Ssd, "Available_Reservd_Space", "Available reserved space", "",
        "Number of reserved blocks remaining. The Normalized value indicates percentage, with 100 meaning new and 10 meaning the drive being close to its end of life.");
    db.add(232, Ssd, "Firmware_Version_Info", "Firmware Version Information", "",
        "Firmware version information (year, month, day, channels, banks).");
    // same, old smartctl spelling
    db.add(232, Ssd, "Firmware_Version_information", "Firmware Version Information", "",
        "Firmware version information (year, month, day, channels, banks).");
    db.add(232, Ssd, "Lifetime_Writes", "Lifetime_Writes", "", "");
    db.add(232, Ssd, "Flash_Writes_GiB", "Flash Written (GiB)", "", "");
    db.add(232, Ssd, "Spares_Remaining_Perc", "Spare Blocks Remaining (%)", "attr_ssd_life_left",
        "Percentage of spare blocks remaining. Spare blocks are used when bad blocks develop.");
    db.add(232, Ssd, "Perc_Avail_Resrvd_Space", "Available Reserved Space (%)", "attr_ssd_life_left",
        "Percentage of spare blocks remaining. Spare blocks are used when bad blocks develop.");
    db.add(233, Ssd, "Media_Wearout_Indicator", "Media Wear Out Indicator", "attr_ssd_life_left",
        "Number of cycles the NAND media has experienced. The Normalized value decreases linearly from 100 to 1 as the average erase cycle \
        count increases from 0 to the maximum rated cycles.");
    db.add(233, Ssd, "Remaining_Lifetime_Perc", "Remaining Lifetime %", "attr_ssd_life_left",
        "Remaining drive life in % (usually by erase count).");
    db.add(233, Ssd, "SandForce_Internal", "Internal Attribute", "", INTERNAL);
    db.add(233, Ssd, "ECC_Fail_Record", "ECC Failure Record", "",
        "Indicates rate of ECC (error-correcting code) failures.");
    db.add(233, Ssd, "Flash_Writes_32MiB", "Flash Written (32MiB)", "", "");
    db.add(233, Ssd, "Total_NAND_Writes_GiB", "Total NAND Written (GiB)", "", "");
    db.add(234, Ssd, "SandForce_Internal", "Internal Attribute", "", INTERNAL);
    db.add(234, Ssd, "Thermal_Throttle", "Thermal Throttle", "", "");
    db.add(234, Ssd, "Erase_Count_Avg/Max", "Erase Count Average / Maximum", "", "");
    db.add(234, Ssd, "Flash_Reads_32MiB", "Flash Read (32MiB)", "", "");
    db.add(234, Ssd, "Perc_Write/Erase_Ct_BC", "Write / Erase Count BC (%)", "", "");
    db.add(235, Ssd, "SuperCap_Health", "Supercapacitor Health", "", "");
    db.add(235, Ssd, "Block_Count_Good/System", "Good / System Free Block Count", "",
        "Good block count and system free block count.");
    db.add(235, Ssd, "Later_Bad_Block", "Later Bad Block", "", "");
    db.add(235, Ssd, "Later_Bad_Blk_Inf_R/W/E", "Later Bad Block Read / Write / Erase", "", "");
    db.add(235, Ssd, "POR_Recovery_Count", "POR Recovery Count", "", "");
    db.add(236, Ssd, "Unstable_Power_Count", "Unstable Power Count", "", "");
    db.add(240, Hdd, "Head_Flying_Hours", "Head Flying Hours", "",
        "Time spent on head is positioning.");
    db.add(240, Hdd, "Transfer_Error_Rate", "Transfer Error Rate", "", "");
    db.add(240, Ssd, "Write_Head", "Write Head", "", "");
    db.add(241, Any, "Total_LBAs_Written", "Total LBAs Written", "",
        "Logical blocks written during lifetime.");
    db.add(241, Ssd, "Lifetime_Writes_GiB", "Total GiB Written", "",
        "Total GiB written during lifetime.");
    db.add(241, Ssd, "Host_Writes_32MiB", "Host Written (32 MiB)", "",
        "Total number of sectors written by the host system. The Raw value is increased by 1 for every 32 MiB written by the host.");
    db.add(241, Ssd, "Host_Writes_GiB", "Host Written (GiB)", "",
        "Total number of sectors written by the host system. The Raw value is increased by 1 for every GiB written by the host.");
    db.add(241, Ssd, "Total_Writes_GiB", "Total Written (GiB)", "", "Total GiB written.");
    db.add(241, Ssd, "Host_Writes", "Host Written", "",
        "Total number of sectors written by the host system.");
    db.add(242, Any, "Total_LBAs_Read", "Total LBAs Read", "",
        "Logical blocks read during lifetime.");
    db.add(242, Ssd, "Lifetime_Reads_GiB", "Total GiB Read", "",
        "Total GiB read during lifetime.");
    db.add(242, Ssd, "Host_Reads_32MiB", "Host Read (32 MiB)", "",
        "Total number of sectors read by the host system. The Raw value is increased by 1 for every 32 MiB read by the host.");
    db.add(242, Ssd, "Host_Reads_GiB", "Host Read (GiB)", "",
        "Total number of sectors read by the host system. The Raw value is increased by 1 for every GiB read by the host.");
    db.add(242, Ssd, "Host_Reads", "Host Read", "", "");
    db.add(241, Ssd, "Total_Reads_GiB", "Total Read (GiB)", "", "Total GiB read.");
    db.add(243, Ssd, "NAND_Writes_32MiB", "NAND Written (32MiB)", "", "");
    db.add(243, Ssd, "SATA_Downshift_Ct", "SATA Downshift Count", "", "");
    db.add(244, Ssd, "Average_Erase_Count", "Average Erase Count", "",
        "The average of individual erase counts of all the blocks");
    db.add(244, Ssd, "Thermal_Throttle_St", "Thermal Throttle Status", "", "");
    db.add(244, Ssd, "Thermal_Throttle", "Thermal Throttle Status", "", "");
    db.add(245, Ssd, "Max_Erase_Count", "Maximum Erase Count", "",
        "The maximum of individual erase counts of all the blocks.");
    db.add(245, Ssd, "Flash_Writes_32MiB", "Flash Written (32MiB)", "", "");
    db.add(245, Ssd, "Timed_Workld_Media_Wear", "Timed Workload Media Wear", "", "");
    db.add(245, Ssd, "TLC_Writes_32MiB", "TLC Written (32MiB)", "",
        "Total number of sectors written to TLC. The Raw value is increased by 1 for every 32 MiB written by the host.");
    db.add(246, Ssd, "Total_Host_Sector_Write", "Total Host Sectors Written", "",
        "Total number of sectors written by the host system.");
    db.add(246, Ssd, "Total_Erase_Count", "Total Erase Count", "", "");
    db.add(246, Ssd, "Timed_Workld_RdWr_Ratio", "Timed Workload Read/Write Ratio", "", "");
    db.add(246, Ssd, "SLC_Writes_32MiB", "SLC Written (32MiB)", "",
        "Total number of sectors written to SLC. The Raw value is increased by 1 for every 32 MiB written by the host.");
    db.add(247, Ssd, "Host_Program_Page_Count", "Host Program Page Count", "", "");
    db.add(247, Ssd, "Timed_Workld_Timer", "Timed Workload Timer", "", "");
    db.add(247, Ssd, "Raid_Recoverty_Ct", "RAID Recovery Count", "", "");
    db.add(248, Ssd, "Bckgnd_Program_Page_Cnt", "Background Program Page Count", "", "");
    db.add(249, Ssd, "NAND_Writes_1GiB", "NAND Written (1GiB)", "", "");
    db.add(249, Ssd, "Total_NAND_Prog_Ct_GiB", "Total NAND Written (1GiB)", "", "");
    db.add(250, Any, "Read_Error_Retry_Rate", "Read Error Retry Rate", "",
        "Number of errors found while reading.");
    db.add(183, Any, "SATA_Iface_Downshift", "SATA Downshift Error Count", "", "");
    db.add(251, Ssd, "Total_NAND_Read_Ct_GiB", "Total NAND Read (1GiB)", "", "");
    db.add(251, Any, "NAND_Writes", "NAND Write Count", "", "");
    db.add(254, Hdd, "Free_Fall_Sensor", "Free Fall Protection", "",
        "Number of free fall events detected by accelerometer sensor.");
}
