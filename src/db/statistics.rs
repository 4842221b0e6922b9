//! Device statistics description table, following ACS-4 (T13/di529)

use super::{StatisticsDatabase, attributes::UNC_TEXT};

/// Append the shared reallocation paragraph to a description
fn with_unc(base: &str) -> String {
    format!("{base}\n\n{UNC_TEXT}")
}

/// Fill the device statistics description database
pub(super) fn populate(db: &mut StatisticsDatabase) {
    // General Statistics
    db.add("Lifetime Power-On Resets", "", "",
        "The number of times the device has processed a power-on reset.");
    db.add("Power-on Hours", "", "",
        "The amount of time that the device has been operational since it was manufactured.");
    db.add("Logical Sectors Written", "", "",
        "The number of logical sectors received from the host. \
        This statistic is incremented by one for each logical sector that was received from the host without an error.");
    db.add("Number of Write Commands", "", "",
        "The number of write commands that returned command completion without an error. \
        This statistic is incremented by one for each write command that returns command completion without an error.");
    db.add("Logical Sectors Read", "", "",
        "The number of logical sectors sent to the host. \
        This statistic is incremented by one for each logical sector that was sent to the host without an error.");
    db.add("Number of Read Commands", "", "",
        "The number of read commands that returned command completion without an error. \
        This statistic is incremented by one for each read command that returns command completion without an error.");
    db.add("Date and Time TimeStamp", "", "",
        "a) the TimeStamp set by the most recent SET DATE &amp; TIME EXT command plus the number of \
        milliseconds that have elapsed since that SET DATE &amp; TIME EXT command was processed;\n\
        or\n\
        b) a copy of the Power-on Hours statistic with the hours unit of measure changed to milliseconds.");
    db.add("Pending Error Count", "", "",
        "The number of logical sectors listed in the Pending Errors log.");
    db.add("Workload Utilization", "", "",
        "An estimate of device utilization as a percentage of the manufacturer's designs for various wear factors \
        (e.g., wear of the medium, head load events), if any. The reported value can be greater than 100%.");
    db.add("Utilization Usage Rate", "", "",
        "An estimate of the rate at which device wear factors (e.g., damage to the recording medium) \
        are being used during a specified interval of time. This statistic is expressed as a percentage of the manufacturer's designs.");

    // Free-Fall Statistics
    db.add("Number of Free-Fall Events Detected", "", "",
        "The number of free-fall events detected by the device.");
    db.add("Overlimit Shock Events", "", "",
        "The number of shock events detected by the device \
        with the magnitude higher than the maximum rating of the device.");

    // Rotating Media Statistics
    db.add("Spindle Motor Power-on Hours", "", "",
        "The amount of time that the spindle motor has been powered on since the device was manufactured.");
    db.add("Head Flying Hours", "", "",
        "The number of hours that the device heads have been flying over the surface of the media since the device was manufactured.");
    db.add("Head Load Events", "", "",
        "The number of head load events. A head load event is defined as:\n\
        a) when the heads are loaded from the ramp to the media for a ramp load device;\n\
        or\n\
        b) when the heads take off from the landing zone for a contact start stop device.");
    db.add("Number of Reallocated Logical Sectors", "", "",
        &with_unc("The number of logical sectors that have been reallocated after device manufacture.\n\n\
        If the value is normalized, this is the whole number percentage of the available logical sector reallocation \
        resources that have been used (i.e., 0-100)."));
    db.add("Read Recovery Attempts", "", "",
        "The number of logical sectors that require three or more attempts to read the data from the media for each read command. \
        This statistic is incremented by one for each logical sector that encounters a read recovery attempt. \
        These events may be caused by external environmental conditions (e.g., operating in a moving vehicle).");
    db.add("Number of Mechanical Start Failures", "", "",
        "The number of mechanical start failures after device manufacture. \
        A mechanical start failure is a failure that prevents the device from achieving a normal operating condition.");
    db.add("Number of Realloc. Candidate Logical Sectors", "Number of Reallocation Candidate Logical Sectors", "",
        &with_unc("The number of logical sectors that are candidates for reallocation. \
        A reallocation candidate sector is a logical sector that the device has determined may need to be reallocated."));
    db.add("Number of High Priority Unload Events", "", "",
        "The number of emergency head unload events.");

    // General Errors Statistics
    db.add("Number of Reported Uncorrectable Errors", "", "",
        &with_unc("The number of errors that are reported as an Uncorrectable Error. \
        Uncorrectable errors that occur during background activity shall not be counted. \
        Uncorrectable errors reported by reads to flagged uncorrectable logical blocks should not be counted."));
    db.add("Resets Between Cmd Acceptance and Completion", "", "",
        "The number of software reset or hardware reset events that occur while one or more commands have \
        been accepted by the device but have not reached command completion.");

    // Temperature Statistics
    db.add("Current Temperature", "Current Temperature (C)", "", "Drive temperature (Celsius)");
    db.add("Average Short Term Temperature", "Average Short Term Temperature (C)", "",
        "A value based on the most recent 144 temperature samples in a 24 hour period.");
    db.add("Average Long Term Temperature", "Average Long Term Temperature (C)", "",
        "A value based on the most recent 42 Average Short Term Temperature values (1,008 recorded hours).");
    db.add("Highest Temperature", "Highest Temperature (C)", "",
        "The highest temperature measured after the device is manufactured.");
    db.add("Lowest Temperature", "Lowest Temperature (C)", "",
        "The lowest temperature measured after the device is manufactured.");
    db.add("Highest Average Short Term Temperature", "Highest Average Short Term Temperature (C)", "",
        "The highest device Average Short Term Temperature after the device is manufactured.");
    db.add("Lowest Average Short Term Temperature", "Lowest Average Short Term Temperature (C)", "",
        "The lowest device Average Short Term Temperature after the device is manufactured.");
    db.add("Highest Average Long Term Temperature", "Highest Average Long Term Temperature (C)", "",
        "The highest device Average Long Term Temperature after the device is manufactured.");
    db.add("Lowest Average Long Term Temperature", "Lowest Average Long Term Temperature (C)", "",
        "The lowest device Average Long Term Temperature after the device is manufactured.");
    db.add("Time in Over-Temperature", "Time in Over-Temperature (Minutes)", "",
        "The number of minutes that the device has been operational while the device temperature specification has been exceeded.");
    db.add("Specified Maximum Operating Temperature", "Specified Maximum Operating Temperature (C)", "",
        "The maximum operating temperature device is designed to operate.");
    db.add("Time in Under-Temperature", "Time in Under-Temperature (Minutes)", "",
        "The number of minutes that the device has been operational while the temperature is lower than the device minimum temperature specification.");
    db.add("Specified Minimum Operating Temperature", "Specified Minimum Operating Temperature (C)", "",
        "The minimum operating temperature device is designed to operate.");

    // Transport Statistics
    db.add("Number of Hardware Resets", "", "",
        "The number of hardware resets received by the device.");
    db.add("Number of ASR Events", "", "",
        "The number of ASR (Asynchronous Signal Recovery) events.");
    db.add("Number of Interface CRC Errors", "", "",
        "The number of Interface CRC (checksum) errors reported in the ERROR field since the device was manufactured.");

    // Solid State Device Statistics
    db.add("Percentage Used Endurance Indicator", "", "",
        "A vendor specific estimate of the percentage of device life used based on the actual device usage \
        and the manufacturer's prediction of device life. A value of 100 indicates that the estimated endurance \
        of the device has been consumed, but may not indicate a device failure (e.g., minimum \
        power-off data retention capability reached for devices using NAND flash technology).");
}
